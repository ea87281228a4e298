pub mod dashboard;
pub mod performance;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;
use crate::utils::renderer::ReportCardRenderer;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    pub(crate) fn get_renderer(&self, request: &HttpRequest) -> Arc<dyn ReportCardRenderer> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ReportCardRenderer>>>()
            .expect("ReportCardRenderer not found in app data")
            .get_ref()
            .clone()
    }

    pub async fn get_performance_report(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        performance::get_performance_report(self, student_id, request).await
    }

    pub async fn get_report_card(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        performance::get_report_card(self, student_id, request).await
    }

    pub async fn get_dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::get_dashboard(self, request).await
    }
}
