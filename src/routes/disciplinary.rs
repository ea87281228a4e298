use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::disciplinary::requests::{
    CreateSuspensionRequest, CreateWarningRequest, DisciplinaryListParams, UpdateSuspensionRequest,
    UpdateWarningRequest,
};
use crate::services::DisciplinaryService;
use crate::utils::SafeIDI64;

static DISCIPLINARY_SERVICE: Lazy<DisciplinaryService> = Lazy::new(DisciplinaryService::new_lazy);

pub async fn list_warnings(
    req: HttpRequest,
    query: web::Query<DisciplinaryListParams>,
) -> ActixResult<HttpResponse> {
    DISCIPLINARY_SERVICE
        .list_warnings(query.into_inner(), &req)
        .await
}

pub async fn create_warning(
    req: HttpRequest,
    warning_data: web::Json<CreateWarningRequest>,
) -> ActixResult<HttpResponse> {
    DISCIPLINARY_SERVICE
        .create_warning(warning_data.into_inner(), &req)
        .await
}

pub async fn get_warning(req: HttpRequest, warning_id: SafeIDI64) -> ActixResult<HttpResponse> {
    DISCIPLINARY_SERVICE.get_warning(warning_id.0, &req).await
}

pub async fn update_warning(
    req: HttpRequest,
    warning_id: SafeIDI64,
    update_data: web::Json<UpdateWarningRequest>,
) -> ActixResult<HttpResponse> {
    DISCIPLINARY_SERVICE
        .update_warning(warning_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_warning(req: HttpRequest, warning_id: SafeIDI64) -> ActixResult<HttpResponse> {
    DISCIPLINARY_SERVICE.delete_warning(warning_id.0, &req).await
}

pub async fn list_suspensions(
    req: HttpRequest,
    query: web::Query<DisciplinaryListParams>,
) -> ActixResult<HttpResponse> {
    DISCIPLINARY_SERVICE
        .list_suspensions(query.into_inner(), &req)
        .await
}

pub async fn create_suspension(
    req: HttpRequest,
    suspension_data: web::Json<CreateSuspensionRequest>,
) -> ActixResult<HttpResponse> {
    DISCIPLINARY_SERVICE
        .create_suspension(suspension_data.into_inner(), &req)
        .await
}

pub async fn get_suspension(
    req: HttpRequest,
    suspension_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    DISCIPLINARY_SERVICE.get_suspension(suspension_id.0, &req).await
}

pub async fn update_suspension(
    req: HttpRequest,
    suspension_id: SafeIDI64,
    update_data: web::Json<UpdateSuspensionRequest>,
) -> ActixResult<HttpResponse> {
    DISCIPLINARY_SERVICE
        .update_suspension(suspension_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_suspension(
    req: HttpRequest,
    suspension_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    DISCIPLINARY_SERVICE
        .delete_suspension(suspension_id.0, &req)
        .await
}

pub fn configure_disciplinary_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/advertencias")
            .wrap(middlewares::RequireJWT)
            .route("/", web::get().to(list_warnings))
            .route("/", web::post().to(create_warning))
            .route("/{id}/", web::get().to(get_warning))
            .route("/{id}/", web::put().to(update_warning))
            .route("/{id}/", web::delete().to(delete_warning)),
    )
    .service(
        web::scope("/api/suspensoes")
            .wrap(middlewares::RequireJWT)
            .route("/", web::get().to(list_suspensions))
            .route("/", web::post().to(create_suspension))
            .route("/{id}/", web::get().to(get_suspension))
            .route("/{id}/", web::put().to(update_suspension))
            .route("/{id}/", web::delete().to(delete_suspension)),
    );
}
