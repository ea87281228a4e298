use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReservationService;
use crate::access::scope;
use crate::models::reservations::requests::{ReservationListParams, ReservationListQuery};
use crate::models::reservations::responses::ReservationResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::load_caller;

pub async fn list_reservations(
    service: &ReservationService,
    query: ReservationListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let list_query = ReservationListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        room_id: query.sala_id,
        owner_id: scope::reservation_owner(&ctx),
    };

    match storage.list_reservations_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Reservation list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve reservation list: {e}"),
            )),
        ),
    }
}

pub async fn get_reservation(
    service: &ReservationService,
    reservation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let not_found = || {
        HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReservationNotFound,
            "Reservation not found",
        ))
    };

    match storage.get_reservation_by_id(reservation_id).await {
        Ok(Some(reservation)) => {
            // Non-coordination callers only see their own bookings
            if let Some(owner_id) = scope::reservation_owner(&ctx)
                && reservation.user_id != Some(owner_id)
            {
                return Ok(not_found());
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ReservationResponse { reservation },
                "Reservation retrieved successfully",
            )))
        }
        Ok(None) => Ok(not_found()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get reservation: {e}"),
            )),
        ),
    }
}
