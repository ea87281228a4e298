use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reservations::requests::{
    CreateReservationRequest, ReservationListParams, UpdateReservationRequest,
};
use crate::services::ReservationService;
use crate::utils::SafeIDI64;

static RESERVATION_SERVICE: Lazy<ReservationService> = Lazy::new(ReservationService::new_lazy);

pub async fn list_reservations(
    req: HttpRequest,
    query: web::Query<ReservationListParams>,
) -> ActixResult<HttpResponse> {
    RESERVATION_SERVICE
        .list_reservations(query.into_inner(), &req)
        .await
}

pub async fn create_reservation(
    req: HttpRequest,
    reservation_data: web::Json<CreateReservationRequest>,
) -> ActixResult<HttpResponse> {
    RESERVATION_SERVICE
        .create_reservation(reservation_data.into_inner(), &req)
        .await
}

pub async fn get_reservation(
    req: HttpRequest,
    reservation_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    RESERVATION_SERVICE.get_reservation(reservation_id.0, &req).await
}

pub async fn update_reservation(
    req: HttpRequest,
    reservation_id: SafeIDI64,
    update_data: web::Json<UpdateReservationRequest>,
) -> ActixResult<HttpResponse> {
    RESERVATION_SERVICE
        .update_reservation(reservation_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_reservation(
    req: HttpRequest,
    reservation_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    RESERVATION_SERVICE
        .delete_reservation(reservation_id.0, &req)
        .await
}

pub fn configure_reservation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reservas")
            .wrap(middlewares::RequireJWT)
            .route("/", web::get().to(list_reservations))
            .route("/", web::post().to(create_reservation))
            .route("/{id}/", web::get().to(get_reservation))
            .route("/{id}/", web::put().to(update_reservation))
            .route("/{id}/", web::delete().to(delete_reservation)),
    );
}
