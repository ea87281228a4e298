use super::entities::RoomReservation;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub reservation: RoomReservation,
}

#[derive(Debug, Serialize)]
pub struct ReservationListResponse {
    pub items: Vec<RoomReservation>,
    pub pagination: PaginationInfo,
}
