use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::requests::LoginRequest,
    auth::responses::LoginResponse,
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    match storage
        .get_user_by_username_or_email(&login_request.username)
        .await
    {
        Ok(Some(user)) => {
            if verify_password(&login_request.password, &user.password_hash) {
                if user.status != crate::models::users::entities::UserStatus::Active {
                    return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                        ErrorCode::AuthFailed,
                        "Account is inactive",
                    )));
                }

                let _ = storage.update_last_login(user.id).await;

                match user
                    .generate_token_pair(login_request.remember_me.then(|| {
                        chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)
                    }))
                    .await
                {
                    Ok(token_pair) => {
                        tracing::info!("User {} logged in successfully", user.username);

                        let response = LoginResponse {
                            access_token: token_pair.access_token,
                            // minutes to seconds
                            expires_in: config.jwt.access_token_expiry * 60,
                            user,
                            created_at: chrono::Utc::now(),
                        };

                        let refresh_cookie =
                            jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                        Ok(HttpResponse::Ok()
                            .cookie(refresh_cookie)
                            .json(ApiResponse::success(response, "Login successful")))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(
                            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Login failed, unable to generate token",
                            )),
                        )
                    }
                }
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Username or password is incorrect",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}
