pub mod login;
pub mod logout;
pub mod reset;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;
use crate::utils::mailer::Mailer;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_cache(
        &self,
        request: &HttpRequest,
    ) -> Arc<dyn crate::cache::ObjectCache> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn crate::cache::ObjectCache>>>()
            .expect("Cache not found in app data")
            .get_ref()
            .clone()
    }

    pub(crate) fn get_mailer(&self, request: &HttpRequest) -> Arc<dyn Mailer> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn Mailer>>>()
            .expect("Mailer not found in app data")
            .get_ref()
            .clone()
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // Credential check and token issuance
    pub async fn login(
        &self,
        login_request: crate::models::auth::requests::LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // Clears the refresh token cookie
    pub async fn logout(&self) -> ActixResult<HttpResponse> {
        logout::handle_logout().await
    }

    // New access token from the refresh token cookie
    pub async fn refresh_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, request).await
    }

    // The authenticated account
    pub async fn get_user(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_get_user(self, request).await
    }

    // E-mails a one-time access code
    pub async fn request_password_reset(
        &self,
        reset_request: crate::models::auth::requests::PasswordResetRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reset::handle_reset_request(self, reset_request, request).await
    }

    // Exchanges a valid code for a session
    pub async fn reset_login(
        &self,
        reset_request: crate::models::auth::requests::PasswordResetLoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reset::handle_reset_login(self, reset_request, request).await
    }
}
