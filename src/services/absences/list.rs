use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AbsenceService;
use crate::access::{Visibility, relations, scope};
use crate::models::absences::requests::{AbsenceListParams, AbsenceListQuery};
use crate::models::absences::responses::AbsenceResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::load_caller;

pub async fn list_absences(
    service: &AbsenceService,
    query: AbsenceListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let mut list_query = AbsenceListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: query.aluno_id,
        offering_id: query.disciplina_id,
        visible_student_ids: None,
        taught_by: None,
    };

    match scope::student_records(&ctx, query.aluno_id) {
        Visibility::All => {}
        Visibility::TaughtBy(teacher_id) => list_query.taught_by = Some(teacher_id),
        Visibility::OwnStudent(profile_id) => {
            list_query.visible_student_ids = Some(vec![profile_id]);
        }
        Visibility::Students(ids) => list_query.visible_student_ids = Some(ids),
        Visibility::Nothing => list_query.visible_student_ids = Some(Vec::new()),
    }

    match storage.list_absences_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Absence list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve absence list: {e}"),
            )),
        ),
    }
}

pub async fn get_absence(
    service: &AbsenceService,
    absence_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let not_found = || {
        HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AbsenceNotFound,
            "Absence not found",
        ))
    };

    let absence = match storage.get_absence_by_id(absence_id).await {
        Ok(Some(absence)) => absence,
        Ok(None) => return Ok(not_found()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get absence: {e}"),
                )),
            );
        }
    };

    let allowed = if ctx.is_coordination() {
        true
    } else if ctx.is_teacher() {
        match storage
            .offering_taught_by(absence.offering_id, ctx.account.id)
            .await
        {
            Ok(taught) => taught,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check absence scope: {e}"),
                    )),
                );
            }
        }
    } else if ctx.is_student() {
        relations::is_own_record(&ctx, absence.student_id)
    } else {
        relations::is_guardian_of(&ctx, absence.student_id)
    };

    if !allowed {
        return Ok(not_found());
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AbsenceResponse { absence },
        "Absence retrieved successfully",
    )))
}
