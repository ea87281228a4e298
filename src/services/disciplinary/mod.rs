pub mod suspensions;
pub mod warnings;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::disciplinary::requests::{
    CreateSuspensionRequest, CreateWarningRequest, DisciplinaryListParams, UpdateSuspensionRequest,
    UpdateWarningRequest,
};
use crate::storage::Storage;

pub struct DisciplinaryService {
    storage: Option<Arc<dyn Storage>>,
}

impl DisciplinaryService {
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

    pub async fn list_warnings(
        &self,
        query: DisciplinaryListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        warnings::list_warnings(self, query, request).await
    }

    pub async fn get_warning(
        &self,
        warning_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        warnings::get_warning(self, warning_id, request).await
    }

    pub async fn create_warning(
        &self,
        warning_data: CreateWarningRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        warnings::create_warning(self, warning_data, request).await
    }

    pub async fn update_warning(
        &self,
        warning_id: i64,
        update_data: UpdateWarningRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        warnings::update_warning(self, warning_id, update_data, request).await
    }

    pub async fn delete_warning(
        &self,
        warning_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        warnings::delete_warning(self, warning_id, request).await
    }

    pub async fn list_suspensions(
        &self,
        query: DisciplinaryListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        suspensions::list_suspensions(self, query, request).await
    }

    pub async fn get_suspension(
        &self,
        suspension_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        suspensions::get_suspension(self, suspension_id, request).await
    }

    pub async fn create_suspension(
        &self,
        suspension_data: CreateSuspensionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        suspensions::create_suspension(self, suspension_data, request).await
    }

    pub async fn update_suspension(
        &self,
        suspension_id: i64,
        update_data: UpdateSuspensionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        suspensions::update_suspension(self, suspension_id, update_data, request).await
    }

    pub async fn delete_suspension(
        &self,
        suspension_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        suspensions::delete_suspension(self, suspension_id, request).await
    }
}
