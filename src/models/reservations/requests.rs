use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReservationListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub sala_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub room_id: i64,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub ends_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReservationRequest {
    pub room_id: Option<i64>,
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,
}

// Reservation list query for the storage layer
#[derive(Debug, Clone)]
pub struct ReservationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub room_id: Option<i64>,
    /// Restrict to reservations owned by this account
    pub owner_id: Option<i64>,
}
