use serde::{Deserialize, Serialize};

// Room reservation over a half-open [starts_at, ends_at) window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomReservation {
    pub id: i64,
    pub room_id: i64,
    /// Reserving account; None after that account is deleted
    pub user_id: Option<i64>,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub ends_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
