use super::entities::Room;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub room: Room,
}

#[derive(Debug, Serialize)]
pub struct RoomListResponse {
    pub items: Vec<Room>,
    pub pagination: PaginationInfo,
}
