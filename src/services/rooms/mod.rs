pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::rooms::requests::{CreateRoomRequest, RoomListParams, UpdateRoomRequest};
use crate::storage::Storage;

pub struct RoomService {
    storage: Option<Arc<dyn Storage>>,
}

impl RoomService {
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

    pub async fn list_rooms(
        &self,
        query: RoomListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_rooms(self, query, request).await
    }

    pub async fn get_room(&self, room_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::get_room(self, room_id, request).await
    }

    pub async fn create_room(
        &self,
        room_data: CreateRoomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_room(self, room_data, request).await
    }

    pub async fn update_room(
        &self,
        room_id: i64,
        update_data: UpdateRoomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_room(self, room_id, update_data, request).await
    }

    pub async fn delete_room(
        &self,
        room_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_room(self, room_id, request).await
    }
}
