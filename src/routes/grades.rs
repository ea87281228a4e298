use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::{CreateGradeRequest, GradeListParams, UpdateGradeRequest};
use crate::services::GradeService;
use crate::utils::SafeIDI64;

static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn list_grades(
    req: HttpRequest,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(query.into_inner(), &req).await
}

pub async fn create_grade(
    req: HttpRequest,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.create_grade(grade_data.into_inner(), &req).await
}

pub async fn get_grade(req: HttpRequest, grade_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(grade_id.0, &req).await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: SafeIDI64,
    update_data: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(grade_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_grade(req: HttpRequest, grade_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(grade_id.0, &req).await
}

// The legacy bulk contract takes a raw JSON array, so the payload is not
// deserialized at the route boundary
pub async fn bulk_update_grades(
    req: HttpRequest,
    payload: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .bulk_update_grades(payload.into_inner(), &req)
        .await
}

pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notas")
            .wrap(middlewares::RequireJWT)
            .route("/", web::get().to(list_grades))
            .route("/", web::post().to(create_grade))
            .route("/bulk_update_notas/", web::post().to(bulk_update_grades))
            .route("/{id}/", web::get().to(get_grade))
            .route("/{id}/", web::put().to(update_grade))
            .route("/{id}/", web::delete().to(delete_grade)),
    );
}
