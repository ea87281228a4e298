use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{
    LoginRequest, PasswordResetLoginRequest, PasswordResetRequest,
};
use crate::services::AuthService;

static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn logout(_req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout().await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn request_password_reset(
    req: HttpRequest,
    reset_data: web::Json<PasswordResetRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .request_password_reset(reset_data.into_inner(), &req)
        .await
}

pub async fn reset_login(
    req: HttpRequest,
    reset_data: web::Json<PasswordResetLoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.reset_login(reset_data.into_inner(), &req).await
}

pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/login/", web::post().to(login))
        .route("/api/password-reset/", web::post().to(request_password_reset))
        .route("/api/password-reset-login/", web::post().to(reset_login))
        .service(
            web::scope("/api/auth")
                .route("/refresh/", web::post().to(refresh_token))
                .service(
                    web::scope("")
                        .wrap(middlewares::RequireJWT)
                        .route("/logout/", web::post().to(logout)),
                ),
        );
}
