pub mod bulk;
pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::{CreateGradeRequest, GradeListParams, UpdateGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    // Scoped grade list
    pub async fn list_grades(
        &self,
        query: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, query, request).await
    }

    pub async fn get_grade(
        &self,
        grade_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_grade(self, grade_id, request).await
    }

    pub async fn create_grade(
        &self,
        grade_data: CreateGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_grade(self, grade_data, request).await
    }

    pub async fn update_grade(
        &self,
        grade_id: i64,
        update_data: UpdateGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_grade(self, grade_id, update_data, request).await
    }

    pub async fn delete_grade(
        &self,
        grade_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_grade(self, grade_id, request).await
    }

    // Batch upsert used by the grade-entry spreadsheet screen
    pub async fn bulk_update_grades(
        &self,
        payload: serde_json::Value,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        bulk::bulk_update_grades(self, payload, request).await
    }
}
