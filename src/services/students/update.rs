use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::access::gate;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::students::responses::StudentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_accounts(&ctx) {
        return Ok(forbidden());
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "Student updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update student: {e}"),
            )),
        ),
    }
}
