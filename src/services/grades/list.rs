use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::access::{Visibility, relations, scope};
use crate::models::grades::requests::{GradeListParams, GradeListQuery};
use crate::models::grades::responses::GradeResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::load_caller;

pub async fn list_grades(
    service: &GradeService,
    query: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let mut list_query = GradeListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: query.aluno_id,
        offering_id: query.disciplina_id,
        term: query.bimestre,
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

    match storage.list_grades_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Grade list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve grade list: {e}"),
            )),
        ),
    }
}

pub async fn get_grade(
    service: &GradeService,
    grade_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let not_found = || {
        HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))
    };

    // Teachers only ever see grades of their own offerings
    let grade = if ctx.is_teacher() {
        storage
            .get_grade_by_id_taught_by(grade_id, ctx.account.id)
            .await
    } else {
        storage.get_grade_by_id(grade_id).await
    };

    let grade = match grade {
        Ok(Some(grade)) => grade,
        Ok(None) => return Ok(not_found()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get grade: {e}"),
                )),
            );
        }
    };

    let allowed = if ctx.is_coordination() || ctx.is_teacher() {
        true
    } else if ctx.is_student() {
        relations::is_own_record(&ctx, grade.student_id)
    } else {
        relations::is_guardian_of(&ctx, grade.student_id)
    };

    if !allowed {
        return Ok(not_found());
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        GradeResponse { grade },
        "Grade retrieved successfully",
    )))
}
