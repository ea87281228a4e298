use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::access::{Visibility, scope};
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::{StudentListParams, StudentListQuery},
};
use crate::services::load_caller;

pub async fn list_students(
    service: &StudentService,
    query: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let mut list_query = StudentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        class_group_id: query.turma_id,
        search: query.search,
        visible_ids: None,
        taught_by: None,
    };

    match scope::student_records(&ctx, None) {
        Visibility::All => {}
        Visibility::TaughtBy(teacher_id) => list_query.taught_by = Some(teacher_id),
        Visibility::OwnStudent(profile_id) => list_query.visible_ids = Some(vec![profile_id]),
        Visibility::Students(ids) => list_query.visible_ids = Some(ids),
        Visibility::Nothing => list_query.visible_ids = Some(Vec::new()),
    }

    match storage.list_students_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student list: {e}"),
            )),
        ),
    }
}
