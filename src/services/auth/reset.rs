//! Password-reset access codes.
//!
//! A 6-digit code is e-mailed to the account address and exchanged for a
//! regular session. The code lives in the cache under the e-mail address,
//! is checked against its issue time, and is deleted on first use.
//!
//! These two endpoints predate the response envelope, so their contract
//! is raw JSON with fixed Portuguese bodies.

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::{Deserialize, Serialize};

use crate::errors::EscolaError;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::requests::{PasswordResetLoginRequest, PasswordResetRequest},
    auth::responses::LoginResponse,
    users::entities::UserStatus,
};
use crate::utils::jwt;
use crate::utils::random::generate_reset_code;

use super::AuthService;

#[derive(Debug, Serialize, Deserialize)]
struct StoredResetCode {
    code: String,
    issued_at: i64,
}

fn reset_cache_key(email: &str) -> String {
    format!("reset_code:{}", email.trim().to_lowercase())
}

// The body never reveals whether the address exists, so the endpoint
// cannot be used to enumerate accounts
fn accepted() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "sucesso": "Se um usuário com este e-mail existir, um código foi enviado."
    }))
}

fn mail_failure(e: &EscolaError) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "erro": format!("Erro ao enviar e-mail: {e}")
    }))
}

// Wrong code and unknown e-mail share one body; expiry gets its own
fn invalid_code() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "erro": "Código ou e-mail inválido."
    }))
}

fn expired_code() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "erro": "Código expirado. Por favor, tente novamente."
    }))
}

pub async fn handle_reset_request(
    service: &AuthService,
    reset_request: PasswordResetRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);
    let config = service.get_config();

    let user = match storage.get_user_by_email(reset_request.email.trim()).await {
        Ok(Some(user)) if user.status == UserStatus::Active => user,
        Ok(_) => return Ok(accepted()),
        Err(e) => {
            tracing::error!("Reset code lookup failed: {}", e);
            return Ok(accepted());
        }
    };

    let code = generate_reset_code();
    let stored = StoredResetCode {
        code: code.clone(),
        issued_at: chrono::Utc::now().timestamp(),
    };

    match serde_json::to_string(&stored) {
        Ok(json) => {
            // Kept past its validity window so an expired attempt can be
            // told apart from a wrong code.
            cache
                .insert_raw(
                    reset_cache_key(&user.email),
                    json,
                    config.reset_code.ttl * 2,
                )
                .await;
        }
        Err(e) => {
            tracing::error!("Reset code serialization failed: {}", e);
            return Ok(accepted());
        }
    }

    let mailer = service.get_mailer(request);
    let body = format!(
        "Olá, {}.\n\nSeu código de acesso é: {}\n\nEle expira em {} minutos.",
        user.full_name(),
        code,
        config.reset_code.ttl / 60,
    );
    if let Err(e) = mailer
        .send(&user.email, "Código de acesso - Sistema Escolar", &body)
        .await
    {
        tracing::error!("Reset code delivery to {} failed: {}", user.email, e);
        return Ok(mail_failure(&e));
    }

    Ok(accepted())
}

pub async fn handle_reset_login(
    service: &AuthService,
    reset_request: PasswordResetLoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);
    let config = service.get_config();

    let user = match storage
        .get_user_by_email(reset_request.email.trim())
        .await
    {
        Ok(Some(user)) if user.status == UserStatus::Active => user,
        Ok(_) => return Ok(invalid_code()),
        Err(e) => {
            tracing::error!("Reset login lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Reset login failed",
                )),
            );
        }
    };

    let key = reset_cache_key(&user.email);

    // A missing entry means the code ran out, not that it was wrong
    let stored = match cache.get_raw(&key).await.into_option() {
        Some(json) => match serde_json::from_str::<StoredResetCode>(&json) {
            Ok(stored) => stored,
            Err(_) => {
                cache.remove(&key).await;
                return Ok(expired_code());
            }
        },
        None => return Ok(expired_code()),
    };

    let age = chrono::Utc::now().timestamp() - stored.issued_at;
    if age > config.reset_code.ttl as i64 {
        cache.remove(&key).await;
        return Ok(expired_code());
    }

    if stored.code != reset_request.codigo.trim() {
        return Ok(invalid_code());
    }

    // Single use
    cache.remove(&key).await;

    let _ = storage.update_last_login(user.id).await;

    match user.generate_token_pair(None).await {
        Ok(token_pair) => {
            tracing::info!("User {} logged in via reset code", user.username);

            let response = LoginResponse {
                access_token: token_pair.access_token,
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn request_always_answers_the_neutral_body() {
        let resp = accepted();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({
                "sucesso": "Se um usuário com este e-mail existir, um código foi enviado."
            })
        );
    }

    #[actix_web::test]
    async fn delivery_failure_surfaces_the_mail_error() {
        let resp = mail_failure(&EscolaError::mail_delivery("SMTP connection refused"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(resp).await;
        let message = body["erro"].as_str().unwrap();
        assert!(message.starts_with("Erro ao enviar e-mail:"));
        assert!(message.contains("SMTP connection refused"));
    }

    #[actix_web::test]
    async fn code_errors_keep_the_fixed_bodies() {
        let resp = invalid_code();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"erro": "Código ou e-mail inválido."})
        );

        let resp = expired_code();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"erro": "Código expirado. Por favor, tente novamente."})
        );
    }
}
