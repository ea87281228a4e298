use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::access::{Visibility, scope};
use crate::models::students::requests::StudentListQuery;
use crate::models::students::responses::StudentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::load_caller;

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::StudentNotFound,
        "Student not found",
    ))
}

pub async fn get_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    // Out-of-scope records answer exactly like missing ones
    let allowed = match scope::student_records(&ctx, Some(student_id)) {
        Visibility::All => true,
        Visibility::OwnStudent(profile_id) => profile_id == student_id,
        Visibility::Students(ids) => ids.contains(&student_id),
        Visibility::TaughtBy(teacher_id) => {
            let probe = StudentListQuery {
                page: Some(1),
                size: Some(1),
                class_group_id: None,
                search: None,
                visible_ids: Some(vec![student_id]),
                taught_by: Some(teacher_id),
            };
            match storage.list_students_with_pagination(probe).await {
                Ok(response) => !response.items.is_empty(),
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to check student scope: {e}"),
                        ),
                    ));
                }
            }
        }
        Visibility::Nothing => false,
    };

    if !allowed {
        return Ok(not_found());
    }

    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "Student retrieved successfully",
        ))),
        Ok(None) => Ok(not_found()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get student: {e}"),
            )),
        ),
    }
}
