use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::access::gate;
use crate::models::subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::models::subjects::responses::SubjectResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

pub async fn create_subject(
    service: &SubjectService,
    subject_data: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_catalog(&ctx) {
        return Ok(forbidden());
    }

    match storage.create_subject(subject_data).await {
        Ok(subject) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SubjectResponse { subject },
            "Subject created",
        ))),
        Err(e) => {
            let msg = format!("Subject creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::DuplicateEntry,
                    "A subject with this name already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

pub async fn update_subject(
    service: &SubjectService,
    subject_id: i64,
    update_data: UpdateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_catalog(&ctx) {
        return Ok(forbidden());
    }

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectResponse { subject },
            "Subject updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update subject: {e}"),
            )),
        ),
    }
}

pub async fn delete_subject(
    service: &SubjectService,
    subject_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_catalog(&ctx) {
        return Ok(forbidden());
    }

    match storage.delete_subject(subject_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Subject deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete subject: {e}"),
            )),
        ),
    }
}
