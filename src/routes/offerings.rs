use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::offerings::requests::{
    CreateOfferingRequest, OfferingListParams, UpdateOfferingRequest,
};
use crate::services::OfferingService;
use crate::utils::SafeIDI64;

static OFFERING_SERVICE: Lazy<OfferingService> = Lazy::new(OfferingService::new_lazy);

pub async fn list_offerings(
    req: HttpRequest,
    query: web::Query<OfferingListParams>,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE.list_offerings(query.into_inner(), &req).await
}

pub async fn create_offering(
    req: HttpRequest,
    offering_data: web::Json<CreateOfferingRequest>,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE
        .create_offering(offering_data.into_inner(), &req)
        .await
}

pub async fn get_offering(req: HttpRequest, offering_id: SafeIDI64) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE.get_offering(offering_id.0, &req).await
}

pub async fn update_offering(
    req: HttpRequest,
    offering_id: SafeIDI64,
    update_data: web::Json<UpdateOfferingRequest>,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE
        .update_offering(offering_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_offering(
    req: HttpRequest,
    offering_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE.delete_offering(offering_id.0, &req).await
}

pub fn configure_offering_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/disciplinas")
            .wrap(middlewares::RequireJWT)
            .route("/", web::get().to(list_offerings))
            .route("/", web::post().to(create_offering))
            .route("/{id}/", web::get().to(get_offering))
            .route("/{id}/", web::put().to(update_offering))
            .route("/{id}/", web::delete().to(delete_offering)),
    );
}
