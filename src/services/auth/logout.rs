use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

/// Clears the client's login state by setting an empty refresh_token
/// cookie (max_age=0 makes the browser drop it).
pub async fn handle_logout() -> ActixResult<HttpResponse> {
    let empty_cookie = JwtUtils::create_empty_refresh_token_cookie();

    Ok(HttpResponse::Ok()
        .cookie(empty_cookie)
        .json(ApiResponse::<()>::success_empty("Logout successful")))
}
