use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassGroupService;
use crate::access::gate;
use crate::models::class_groups::requests::{CreateClassGroupRequest, UpdateClassGroupRequest};
use crate::models::class_groups::responses::ClassGroupResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

pub async fn create_class_group(
    service: &ClassGroupService,
    group_data: CreateClassGroupRequest,
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

    match storage.create_class_group(group_data).await {
        Ok(class_group) => Ok(HttpResponse::Created().json(ApiResponse::success(
            ClassGroupResponse { class_group },
            "Class group created",
        ))),
        Err(e) => {
            let msg = format!("Class group creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::DuplicateEntry,
                    "A class group with this name already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

pub async fn update_class_group(
    service: &ClassGroupService,
    group_id: i64,
    update_data: UpdateClassGroupRequest,
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

    match storage.update_class_group(group_id, update_data).await {
        Ok(Some(class_group)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassGroupResponse { class_group },
            "Class group updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassGroupNotFound,
            "Class group not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update class group: {e}"),
            )),
        ),
    }
}

pub async fn delete_class_group(
    service: &ClassGroupService,
    group_id: i64,
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

    match storage.delete_class_group(group_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Class group deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassGroupNotFound,
            "Class group not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete class group: {e}"),
            )),
        ),
    }
}
