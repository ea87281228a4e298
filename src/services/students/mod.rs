pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // Scoped student list
    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    // Creates the account and the profile together
    pub async fn create_student(
        &self,
        student_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, student_data, request).await
    }

    // Student by profile id, subject to the caller's scope
    pub async fn get_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, student_id, request).await
    }

    // Updates enrollment fields
    pub async fn update_student(
        &self,
        student_id: i64,
        update_data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, student_id, update_data, request).await
    }

    // Deletes the profile (the account stays)
    pub async fn delete_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id, request).await
    }
}
