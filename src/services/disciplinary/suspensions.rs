use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DisciplinaryService;
use crate::access::{Visibility, gate, scope};
use crate::models::disciplinary::requests::{
    CreateSuspensionRequest, DisciplinaryListParams, DisciplinaryListQuery,
    UpdateSuspensionRequest,
};
use crate::models::disciplinary::responses::SuspensionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

pub async fn list_suspensions(
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
        Visibility::TaughtBy(_) | Visibility::Nothing => {
            list_query.visible_student_ids = Some(Vec::new());
        }
    }

    match storage.list_suspensions_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Suspension list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve suspension list: {e}"),
            )),
        ),
    }
}

pub async fn get_suspension(
    service: &DisciplinaryService,
    suspension_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    match storage.get_suspension_by_id(suspension_id).await {
        Ok(Some(suspension)) => {
            // Scoped-out records answer 404, never 403
            let visible = match scope::disciplinary_records(&ctx, Some(suspension.student_id)) {
                Visibility::All => true,
                Visibility::OwnStudent(profile_id) => suspension.student_id == profile_id,
                Visibility::Students(ids) => ids.contains(&suspension.student_id),
                Visibility::TaughtBy(_) | Visibility::Nothing => false,
            };
            if !visible {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::NotFound,
                    "Suspension not found",
                )));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SuspensionResponse { suspension },
                "Suspension retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Suspension not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get suspension: {e}"),
            )),
        ),
    }
}

pub async fn create_suspension(
    service: &DisciplinaryService,
    suspension_data: CreateSuspensionRequest,
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

    if suspension_data.end_date < suspension_data.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Suspension end date must not precede its start date",
        )));
    }

    match storage.create_suspension(suspension_data).await {
        Ok(suspension) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SuspensionResponse { suspension },
            "Suspension recorded",
        ))),
        Err(e) => {
            error!("Suspension creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Suspension creation failed: {e}"),
                )),
            )
        }
    }
}

pub async fn update_suspension(
    service: &DisciplinaryService,
    suspension_id: i64,
    update_data: UpdateSuspensionRequest,
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

    if let (Some(start), Some(end)) = (update_data.start_date, update_data.end_date)
        && end < start
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Suspension end date must not precede its start date",
        )));
    }

    match storage.update_suspension(suspension_id, update_data).await {
        Ok(Some(suspension)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SuspensionResponse { suspension },
            "Suspension updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Suspension not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update suspension: {e}"),
            )),
        ),
    }
}

pub async fn delete_suspension(
    service: &DisciplinaryService,
    suspension_id: i64,
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

    match storage.delete_suspension(suspension_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Suspension deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Suspension not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete suspension: {e}"),
            )),
        ),
    }
}
