use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReservationService;
use crate::access::gate;
use crate::models::reservations::entities::RoomReservation;
use crate::models::reservations::requests::{CreateReservationRequest, UpdateReservationRequest};
use crate::models::reservations::responses::ReservationResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};
use crate::storage::Storage;

fn invalid_window() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        "Reservation must end after it starts",
    ))
}

fn conflict() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ReservationConflict,
        "The room is already reserved for this time window",
    ))
}

// Two half-open [starts_at, ends_at) windows collide when each starts
// before the other ends
fn window_conflicts(
    existing: &[RoomReservation],
    starts_at: chrono::DateTime<chrono::Utc>,
    ends_at: chrono::DateTime<chrono::Utc>,
    exclude_id: Option<i64>,
) -> bool {
    existing
        .iter()
        .filter(|r| Some(r.id) != exclude_id)
        .any(|r| r.starts_at < ends_at && r.ends_at > starts_at)
}

// The check-then-insert pair is not atomic; two simultaneous requests for
// the same window can both pass. Accepted for this workload.
async fn has_overlap(
    storage: &std::sync::Arc<dyn Storage>,
    room_id: i64,
    starts_at: chrono::DateTime<chrono::Utc>,
    ends_at: chrono::DateTime<chrono::Utc>,
    exclude_id: Option<i64>,
) -> Result<bool, HttpResponse> {
    match storage.list_room_reservations(room_id).await {
        Ok(existing) => Ok(window_conflicts(&existing, starts_at, ends_at, exclude_id)),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to check reservation overlap: {e}"),
            )),
        ),
    }
}

pub async fn create_reservation(
    service: &ReservationService,
    reservation_data: CreateReservationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if reservation_data.ends_at <= reservation_data.starts_at {
        return Ok(invalid_window());
    }

    match storage.get_room_by_id(reservation_data.room_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RoomNotFound,
                "Room not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get room: {e}"),
                )),
            );
        }
    }

    match has_overlap(
        &storage,
        reservation_data.room_id,
        reservation_data.starts_at,
        reservation_data.ends_at,
        None,
    )
    .await
    {
        Ok(true) => return Ok(conflict()),
        Ok(false) => {}
        Err(resp) => return Ok(resp),
    }

    // The owner is always the caller; the payload cannot book on behalf of
    // another account
    match storage
        .create_reservation(ctx.account.id, reservation_data)
        .await
    {
        Ok(reservation) => Ok(HttpResponse::Created().json(ApiResponse::success(
            ReservationResponse { reservation },
            "Reservation created",
        ))),
        Err(e) => {
            error!("Reservation creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Reservation creation failed: {e}"),
                )),
            )
        }
    }
}

// Changing or cancelling a booking is reserved for coordination, even for
// the account that created it
async fn load_for_modify(
    service: &ReservationService,
    reservation_id: i64,
    request: &HttpRequest,
) -> Result<RoomReservation, HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Err(resp),
    };

    if !gate::can_modify_reservations(&ctx) {
        return Err(forbidden());
    }

    match storage.get_reservation_by_id(reservation_id).await {
        Ok(Some(reservation)) => Ok(reservation),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReservationNotFound,
            "Reservation not found",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get reservation: {e}"),
            )),
        ),
    }
}

pub async fn update_reservation(
    service: &ReservationService,
    reservation_id: i64,
    update_data: UpdateReservationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current = match load_for_modify(service, reservation_id, request).await {
        Ok(reservation) => reservation,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    // The merged window is re-validated, not just the changed fields
    let room_id = update_data.room_id.unwrap_or(current.room_id);
    let starts_at = update_data.starts_at.unwrap_or(current.starts_at);
    let ends_at = update_data.ends_at.unwrap_or(current.ends_at);

    if ends_at <= starts_at {
        return Ok(invalid_window());
    }

    match has_overlap(&storage, room_id, starts_at, ends_at, Some(reservation_id)).await {
        Ok(true) => return Ok(conflict()),
        Ok(false) => {}
        Err(resp) => return Ok(resp),
    }

    match storage.update_reservation(reservation_id, update_data).await {
        Ok(Some(reservation)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReservationResponse { reservation },
            "Reservation updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReservationNotFound,
            "Reservation not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update reservation: {e}"),
            )),
        ),
    }
}

pub async fn delete_reservation(
    service: &ReservationService,
    reservation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = load_for_modify(service, reservation_id, request).await {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.delete_reservation(reservation_id).await {
        Ok(true) => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("Reservation deleted successfully"))
        ),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReservationNotFound,
            "Reservation not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete reservation: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(hour: u32) -> chrono::DateTime<chrono::Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, hour, 0, 0).unwrap()
    }

    fn booking(id: i64, start_hour: u32, end_hour: u32) -> RoomReservation {
        RoomReservation {
            id,
            room_id: 1,
            user_id: Some(7),
            starts_at: at(start_hour),
            ends_at: at(end_hour),
            created_at: at(0),
            updated_at: at(0),
        }
    }

    #[test]
    fn rejects_any_intersecting_window() {
        let existing = vec![booking(1, 10, 12)];

        assert!(window_conflicts(&existing, at(11), at(13), None));
        assert!(window_conflicts(&existing, at(9), at(11), None));
        assert!(window_conflicts(&existing, at(10), at(12), None));
        assert!(window_conflicts(&existing, at(9), at(13), None));
    }

    #[test]
    fn accepts_windows_fully_before_or_after() {
        let existing = vec![booking(1, 10, 12)];

        assert!(!window_conflicts(&existing, at(8), at(10), None));
        assert!(!window_conflicts(&existing, at(12), at(14), None));
    }

    #[test]
    fn update_skips_the_reservation_being_moved() {
        let existing = vec![booking(1, 10, 12), booking(2, 14, 16)];

        assert!(!window_conflicts(&existing, at(10), at(12), Some(1)));
        assert!(window_conflicts(&existing, at(15), at(17), Some(1)));
    }
}
