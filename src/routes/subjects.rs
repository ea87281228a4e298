use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest,
};
use crate::services::SubjectService;
use crate::utils::SafeIDI64;

static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectListParams>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(query.into_inner(), &req).await
}

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(subject_data.into_inner(), &req)
        .await
}

pub async fn get_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.get_subject(subject_id.0, &req).await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeIDI64,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(subject_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(subject_id.0, &req).await
}

pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/materias")
            .wrap(middlewares::RequireJWT)
            .route("/", web::get().to(list_subjects))
            .route("/", web::post().to(create_subject))
            .route("/{id}/", web::get().to(get_subject))
            .route("/{id}/", web::put().to(update_subject))
            .route("/{id}/", web::delete().to(delete_subject)),
    );
}
