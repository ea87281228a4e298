use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::guardians::requests::{
    CreateGuardianRequest, GuardianListParams, UpdateGuardianRequest,
};
use crate::services::GuardianService;
use crate::utils::SafeIDI64;

static GUARDIAN_SERVICE: Lazy<GuardianService> = Lazy::new(GuardianService::new_lazy);

pub async fn list_guardians(
    req: HttpRequest,
    query: web::Query<GuardianListParams>,
) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE.list_guardians(query.into_inner(), &req).await
}

pub async fn create_guardian(
    req: HttpRequest,
    guardian_data: web::Json<CreateGuardianRequest>,
) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE
        .create_guardian(guardian_data.into_inner(), &req)
        .await
}

pub async fn get_guardian(req: HttpRequest, guardian_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE.get_guardian(guardian_id.0, &req).await
}

pub async fn update_guardian(
    req: HttpRequest,
    guardian_id: SafeIDI64,
    update_data: web::Json<UpdateGuardianRequest>,
) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE
        .update_guardian(guardian_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_guardian(
    req: HttpRequest,
    guardian_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE.delete_guardian(guardian_id.0, &req).await
}

// Portal self-view for guardian accounts
pub async fn get_own_profile(request: HttpRequest) -> ActixResult<HttpResponse> {
    GUARDIAN_SERVICE.get_own_profile(&request).await
}

pub fn configure_guardian_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/responsaveis")
            .wrap(middlewares::RequireJWT)
            .route("/me/", web::get().to(get_own_profile))
            .route("/", web::get().to(list_guardians))
            .route("/", web::post().to(create_guardian))
            .route("/{id}/", web::get().to(get_guardian))
            .route("/{id}/", web::put().to(update_guardian))
            .route("/{id}/", web::delete().to(delete_guardian)),
    );
}
