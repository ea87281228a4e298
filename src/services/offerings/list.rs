use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OfferingService;
use crate::access::{Visibility, relations, scope};
use crate::models::offerings::requests::{OfferingListParams, OfferingListQuery};
use crate::models::offerings::responses::OfferingResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::load_caller;

pub async fn list_offerings(
    service: &OfferingService,
    query: OfferingListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let mut list_query = OfferingListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        class_group_id: query.turma_id,
        taught_by: None,
        student_ids: None,
    };

    match scope::offerings(&ctx) {
        Visibility::All => {}
        Visibility::TaughtBy(teacher_id) => list_query.taught_by = Some(teacher_id),
        Visibility::OwnStudent(profile_id) => list_query.student_ids = Some(vec![profile_id]),
        Visibility::Students(ids) => list_query.student_ids = Some(ids),
        Visibility::Nothing => list_query.student_ids = Some(Vec::new()),
    }

    match storage.list_offerings_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Offering list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve offering list: {e}"),
            )),
        ),
    }
}

pub async fn get_offering(
    service: &OfferingService,
    offering_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let not_found = || {
        HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::OfferingNotFound,
            "Offering not found",
        ))
    };

    let offering = match storage.get_offering_by_id(offering_id).await {
        Ok(Some(offering)) => offering,
        Ok(None) => return Ok(not_found()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get offering: {e}"),
                )),
            );
        }
    };

    let allowed = match scope::offerings(&ctx) {
        Visibility::All => true,
        Visibility::TaughtBy(_) => relations::teaches_offering(&ctx, &offering),
        Visibility::OwnStudent(profile_id) => {
            // Students reach the offerings of their own class group
            match storage.get_student_by_id(profile_id).await {
                Ok(Some(student)) => student.profile.class_group_id == Some(offering.class_group_id),
                Ok(None) => false,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to check offering scope: {e}"),
                        ),
                    ));
                }
            }
        }
        Visibility::Students(_) | Visibility::Nothing => false,
    };

    if !allowed {
        return Ok(not_found());
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        OfferingResponse { offering },
        "Offering retrieved successfully",
    )))
}
