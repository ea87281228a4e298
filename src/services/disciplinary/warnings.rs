use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DisciplinaryService;
use crate::access::{Visibility, gate, scope};
use crate::models::disciplinary::requests::{
    CreateWarningRequest, DisciplinaryListParams, DisciplinaryListQuery, UpdateWarningRequest,
};
use crate::models::disciplinary::responses::WarningResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

pub async fn list_warnings(
    service: &DisciplinaryService,
    query: DisciplinaryListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let mut list_query = DisciplinaryListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: query.aluno_id,
        visible_student_ids: None,
    };

    match scope::disciplinary_records(&ctx, query.aluno_id) {
        Visibility::All => {}
        Visibility::OwnStudent(profile_id) => {
            list_query.visible_student_ids = Some(vec![profile_id]);
        }
        Visibility::Students(ids) => list_query.visible_student_ids = Some(ids),
        // Disciplinary records are not offering-scoped, so TaughtBy never
        // reaches here
        Visibility::TaughtBy(_) | Visibility::Nothing => {
            list_query.visible_student_ids = Some(Vec::new());
        }
    }

    match storage.list_warnings_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Warning list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve warning list: {e}"),
            )),
        ),
    }
}

pub async fn get_warning(
    service: &DisciplinaryService,
    warning_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    match storage.get_warning_by_id(warning_id).await {
        Ok(Some(warning)) => {
            // Scoped-out records answer 404, never 403
            let visible = match scope::disciplinary_records(&ctx, Some(warning.student_id)) {
                Visibility::All => true,
                Visibility::OwnStudent(profile_id) => warning.student_id == profile_id,
                Visibility::Students(ids) => ids.contains(&warning.student_id),
                Visibility::TaughtBy(_) | Visibility::Nothing => false,
            };
            if !visible {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::NotFound,
                    "Warning not found",
                )));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                WarningResponse { warning },
                "Warning retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Warning not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get warning: {e}"),
            )),
        ),
    }
}

pub async fn create_warning(
    service: &DisciplinaryService,
    warning_data: CreateWarningRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_write_disciplinary(&ctx) {
        return Ok(forbidden());
    }

    match storage.create_warning(warning_data).await {
        Ok(warning) => Ok(HttpResponse::Created().json(ApiResponse::success(
            WarningResponse { warning },
            "Warning recorded",
        ))),
        Err(e) => {
            error!("Warning creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Warning creation failed: {e}"),
                )),
            )
        }
    }
}

pub async fn update_warning(
    service: &DisciplinaryService,
    warning_id: i64,
    update_data: UpdateWarningRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_write_disciplinary(&ctx) {
        return Ok(forbidden());
    }

    match storage.update_warning(warning_id, update_data).await {
        Ok(Some(warning)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            WarningResponse { warning },
            "Warning updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Warning not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update warning: {e}"),
            )),
        ),
    }
}

pub async fn delete_warning(
    service: &DisciplinaryService,
    warning_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_write_disciplinary(&ctx) {
        return Ok(forbidden());
    }

    match storage.delete_warning(warning_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Warning deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Warning not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete warning: {e}"),
            )),
        ),
    }
}
