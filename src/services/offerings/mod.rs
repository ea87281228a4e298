pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::offerings::requests::{
    CreateOfferingRequest, OfferingListParams, UpdateOfferingRequest,
};
use crate::storage::Storage;

pub struct OfferingService {
    storage: Option<Arc<dyn Storage>>,
}

impl OfferingService {
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

    // Scoped offering list
    pub async fn list_offerings(
        &self,
        query: OfferingListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_offerings(self, query, request).await
    }

    pub async fn get_offering(
        &self,
        offering_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_offering(self, offering_id, request).await
    }

    pub async fn create_offering(
        &self,
        offering_data: CreateOfferingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_offering(self, offering_data, request).await
    }

    pub async fn update_offering(
        &self,
        offering_id: i64,
        update_data: UpdateOfferingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_offering(self, offering_id, update_data, request).await
    }

    pub async fn delete_offering(
        &self,
        offering_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_offering(self, offering_id, request).await
    }
}
