use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GuardianService;
use crate::access::gate;
use crate::models::guardians::requests::{
    CreateGuardianRequest, GuardianListParams, GuardianListQuery, UpdateGuardianRequest,
};
use crate::models::guardians::responses::{CreatedGuardianResponse, GuardianResponse};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};
use crate::utils::password::hash_password;
use crate::utils::random::generate_temp_password;
use crate::utils::validate::{validate_email, validate_username};

pub async fn list_guardians(
    service: &GuardianService,
    query: GuardianListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_guardians(&ctx) {
        return Ok(forbidden());
    }

    let list_query = GuardianListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
    };

    match storage.list_guardians_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Guardian list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve guardian list: {e}"),
            )),
        ),
    }
}

pub async fn get_guardian(
    service: &GuardianService,
    guardian_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_guardians(&ctx) {
        return Ok(forbidden());
    }

    match storage.get_guardian_by_id(guardian_id).await {
        Ok(Some(guardian)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GuardianResponse { guardian },
            "Guardian retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GuardianNotFound,
            "Guardian not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get guardian: {e}"),
            )),
        ),
    }
}

pub async fn create_guardian(
    service: &GuardianService,
    guardian_data: CreateGuardianRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_guardians(&ctx) {
        return Ok(forbidden());
    }

    if let Err(msg) = validate_username(&guardian_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&guardian_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    let temp_password = generate_temp_password();
    let password_hash = match hash_password(&temp_password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let account_request = CreateUserRequest {
        username: guardian_data.username.clone(),
        email: guardian_data.email.clone(),
        role: UserRole::Guardian,
        first_name: guardian_data.first_name.clone(),
        last_name: guardian_data.last_name.clone(),
    };

    let user = match storage.create_user(account_request, &password_hash).await {
        Ok(user) => user,
        Err(e) => {
            let msg = format!("Guardian account creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Username or email already exists",
                )));
            }
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::UserCreationFailed, msg)));
        }
    };

    let profile = match storage.create_guardian_profile(user.id, guardian_data).await {
        Ok(profile) => profile,
        Err(e) => {
            error!("Guardian profile creation failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Guardian profile creation failed: {e}"),
                )),
            );
        }
    };

    match storage.get_guardian_by_id(profile.id).await {
        Ok(Some(guardian)) => Ok(HttpResponse::Created().json(ApiResponse::success(
            CreatedGuardianResponse {
                guardian,
                temp_password,
            },
            "Guardian created",
        ))),
        Ok(None) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Guardian profile vanished after creation",
            )),
        ),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load created guardian: {e}"),
            )),
        ),
    }
}

pub async fn update_guardian(
    service: &GuardianService,
    guardian_id: i64,
    update_data: UpdateGuardianRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_guardians(&ctx) {
        return Ok(forbidden());
    }

    match storage.update_guardian(guardian_id, update_data).await {
        Ok(Some(guardian)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GuardianResponse { guardian },
            "Guardian updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GuardianNotFound,
            "Guardian not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update guardian: {e}"),
            )),
        ),
    }
}

pub async fn delete_guardian(
    service: &GuardianService,
    guardian_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_guardians(&ctx) {
        return Ok(forbidden());
    }

    match storage.delete_guardian(guardian_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Guardian deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GuardianNotFound,
            "Guardian not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete guardian: {e}"),
            )),
        ),
    }
}
