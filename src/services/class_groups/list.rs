use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassGroupService;
use crate::models::class_groups::requests::{ClassGroupListParams, ClassGroupListQuery};
use crate::models::class_groups::responses::{ClassGroupResponse, ClassGroupWithStudents};
use crate::models::students::entities::StudentStatus;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_class_groups(
    service: &ClassGroupService,
    query: ClassGroupListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = ClassGroupListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        shift: query.shift,
        search: query.search,
    };

    match storage.list_class_groups_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Class group list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve class group list: {e}"),
            )),
        ),
    }
}

pub async fn get_class_group(
    service: &ClassGroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_group_by_id(group_id).await {
        Ok(Some(class_group)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassGroupResponse { class_group },
            "Class group retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassGroupNotFound,
            "Class group not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get class group: {e}"),
            )),
        ),
    }
}

pub async fn get_class_group_with_students(
    service: &ClassGroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let class_group = match storage.get_class_group_by_id(group_id).await {
        Ok(Some(class_group)) => class_group,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassGroupNotFound,
                "Class group not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get class group: {e}"),
                )),
            );
        }
    };

    let profiles = match storage.list_student_profiles_by_group(group_id).await {
        Ok(profiles) => profiles,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list class group students: {e}"),
                )),
            );
        }
    };

    // Only active enrollments make the roster
    let active_ids: Vec<i64> = profiles
        .iter()
        .filter(|p| p.status == StudentStatus::Active)
        .map(|p| p.id)
        .collect();

    match storage.list_students_by_ids(&active_ids).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassGroupWithStudents {
                class_group,
                students,
            },
            "Class group retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list class group students: {e}"),
            )),
        ),
    }
}
