pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reservations::requests::{
    CreateReservationRequest, ReservationListParams, UpdateReservationRequest,
};
use crate::storage::Storage;

pub struct ReservationService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReservationService {
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

    pub async fn list_reservations(
        &self,
        query: ReservationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_reservations(self, query, request).await
    }

    pub async fn get_reservation(
        &self,
        reservation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_reservation(self, reservation_id, request).await
    }

    pub async fn create_reservation(
        &self,
        reservation_data: CreateReservationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_reservation(self, reservation_data, request).await
    }

    pub async fn update_reservation(
        &self,
        reservation_id: i64,
        update_data: UpdateReservationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_reservation(self, reservation_id, update_data, request).await
    }

    pub async fn delete_reservation(
        &self,
        reservation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_reservation(self, reservation_id, request).await
    }
}
