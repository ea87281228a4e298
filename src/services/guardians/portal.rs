use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GuardianService;
use crate::access::gate;
use crate::models::guardians::responses::GuardianResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

pub async fn get_own_profile(
    service: &GuardianService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_use_guardian_portal(&ctx) {
        return Ok(forbidden());
    }

    let profile = match storage.get_guardian_by_user_id(ctx.account.id).await {
        Ok(Some(profile)) => profile,
        // Guardian account without a profile row; treated as not found
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GuardianNotFound,
                "Guardian profile not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get guardian profile: {e}"),
                )),
            );
        }
    };

    match storage.get_guardian_by_id(profile.id).await {
        Ok(Some(guardian)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GuardianResponse { guardian },
            "Guardian profile retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GuardianNotFound,
            "Guardian profile not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get guardian profile: {e}"),
            )),
        ),
    }
}
