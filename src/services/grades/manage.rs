use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::access::gate;
use crate::models::grades::requests::{CreateGradeRequest, UpdateGradeRequest};
use crate::models::grades::responses::GradeResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

pub async fn create_grade(
    service: &GradeService,
    grade_data: CreateGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_write_grades(&ctx) {
        return Ok(forbidden());
    }

    // Teachers post grades only into their own offerings
    if !ctx.is_coordination() {
        match storage
            .offering_taught_by(grade_data.offering_id, ctx.account.id)
            .await
        {
            Ok(true) => {}
            Ok(false) => return Ok(forbidden()),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check offering ownership: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_grade(grade_data).await {
        Ok(grade) => Ok(HttpResponse::Created().json(ApiResponse::success(
            GradeResponse { grade },
            "Grade created",
        ))),
        Err(e) => {
            let msg = format!("Grade creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::DuplicateEntry,
                    "This grade has already been posted for this term",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

pub async fn update_grade(
    service: &GradeService,
    grade_id: i64,
    update_data: UpdateGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_write_grades(&ctx) {
        return Ok(forbidden());
    }

    if !ctx.is_coordination() {
        match storage
            .get_grade_by_id_taught_by(grade_id, ctx.account.id)
            .await
        {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::GradeNotFound,
                    "Grade not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check grade ownership: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_grade(grade_id, update_data).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradeResponse { grade },
            "Grade updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update grade: {e}"),
            )),
        ),
    }
}

pub async fn delete_grade(
    service: &GradeService,
    grade_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_write_grades(&ctx) {
        return Ok(forbidden());
    }

    if !ctx.is_coordination() {
        match storage
            .get_grade_by_id_taught_by(grade_id, ctx.account.id)
            .await
        {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::GradeNotFound,
                    "Grade not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check grade ownership: {e}"),
                    )),
                );
            }
        }
    }

    match storage.delete_grade(grade_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Grade deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete grade: {e}"),
            )),
        ),
    }
}
