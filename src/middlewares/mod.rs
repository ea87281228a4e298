pub mod require_jwt;
pub mod require_role;

pub use require_jwt::RequireJWT;
pub use require_role::RequireRole;

use crate::models::{ApiResponse, ErrorCode};
use actix_web::{
    HttpResponse,
    http::StatusCode,
    http::header::CONTENT_TYPE,
};

/// Shared error response builder for middleware rejections.
pub fn create_error_response(status: StatusCode, code: ErrorCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NOT_FOUND => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(message.to_string()),
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(code, message)),
    }
}
