use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::requests::{SubjectListParams, SubjectListQuery};
use crate::models::subjects::responses::SubjectResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_subjects(
    service: &SubjectService,
    query: SubjectListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = SubjectListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
    };

    match storage.list_subjects_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Subject list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve subject list: {e}"),
            )),
        ),
    }
}

pub async fn get_subject(
    service: &SubjectService,
    subject_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectResponse { subject },
            "Subject retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get subject: {e}"),
            )),
        ),
    }
}
