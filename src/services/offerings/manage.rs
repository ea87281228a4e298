use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::OfferingService;
use crate::access::gate;
use crate::models::offerings::requests::{CreateOfferingRequest, UpdateOfferingRequest};
use crate::models::offerings::responses::OfferingResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

pub async fn create_offering(
    service: &OfferingService,
    offering_data: CreateOfferingRequest,
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

    match storage.create_offering(offering_data).await {
        Ok(offering) => Ok(HttpResponse::Created().json(ApiResponse::success(
            OfferingResponse { offering },
            "Offering created",
        ))),
        Err(e) => {
            let msg = format!("Offering creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::DuplicateEntry,
                    "This subject is already offered to this class group",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

pub async fn update_offering(
    service: &OfferingService,
    offering_id: i64,
    update_data: UpdateOfferingRequest,
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

    match storage.update_offering(offering_id, update_data).await {
        Ok(Some(offering)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            OfferingResponse { offering },
            "Offering updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::OfferingNotFound,
            "Offering not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update offering: {e}"),
            )),
        ),
    }
}

pub async fn delete_offering(
    service: &OfferingService,
    offering_id: i64,
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

    match storage.delete_offering(offering_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Offering deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::OfferingNotFound,
            "Offering not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete offering: {e}"),
            )),
        ),
    }
}
