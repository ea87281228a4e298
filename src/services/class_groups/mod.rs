pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::class_groups::requests::{
    ClassGroupListParams, CreateClassGroupRequest, UpdateClassGroupRequest,
};
use crate::storage::Storage;

pub struct ClassGroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassGroupService {
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

    pub async fn list_class_groups(
        &self,
        query: ClassGroupListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_class_groups(self, query, request).await
    }

    pub async fn get_class_group(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_class_group(self, group_id, request).await
    }

    // The group plus its active roster
    pub async fn get_class_group_with_students(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_class_group_with_students(self, group_id, request).await
    }

    pub async fn create_class_group(
        &self,
        group_data: CreateClassGroupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_class_group(self, group_data, request).await
    }

    pub async fn update_class_group(
        &self,
        group_id: i64,
        update_data: UpdateClassGroupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_class_group(self, group_id, update_data, request).await
    }

    pub async fn delete_class_group(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_class_group(self, group_id, request).await
    }
}
