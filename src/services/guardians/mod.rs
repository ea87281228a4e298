pub mod manage;
pub mod portal;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::guardians::requests::{
    CreateGuardianRequest, GuardianListParams, UpdateGuardianRequest,
};
use crate::storage::Storage;

pub struct GuardianService {
    storage: Option<Arc<dyn Storage>>,
}

impl GuardianService {
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

    pub async fn list_guardians(
        &self,
        query: GuardianListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::list_guardians(self, query, request).await
    }

    pub async fn get_guardian(
        &self,
        guardian_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::get_guardian(self, guardian_id, request).await
    }

    pub async fn create_guardian(
        &self,
        guardian_data: CreateGuardianRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_guardian(self, guardian_data, request).await
    }

    pub async fn update_guardian(
        &self,
        guardian_id: i64,
        update_data: UpdateGuardianRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_guardian(self, guardian_id, update_data, request).await
    }

    pub async fn delete_guardian(
        &self,
        guardian_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_guardian(self, guardian_id, request).await
    }

    // Portal self-view: the caller's own profile plus linked students
    pub async fn get_own_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        portal::get_own_profile(self, request).await
    }
}
