use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::CreateUserRequest, responses::CreatedUserResponse},
};
use crate::utils::password::hash_password;
use crate::utils::random::generate_temp_password;
use crate::utils::validate::{validate_email, validate_username};

pub async fn create_user(
    service: &UserService,
    user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_username(&user_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // The temporary password is returned once and never stored in clear
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

    let storage = service.get_storage(request);

    match storage.create_user(user_data, &password_hash).await {
        Ok(user) => Ok(HttpResponse::Created().json(ApiResponse::success(
            CreatedUserResponse {
                user,
                temp_password,
            },
            "Account created",
        ))),
        Err(e) => {
            let msg = format!("User creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Username or email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::UserCreationFailed, msg)))
            }
        }
    }
}
