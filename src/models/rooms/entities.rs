use serde::{Deserialize, Serialize};

// Reservable room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    /// Free-form kind, e.g. "laboratório", "auditório"
    pub kind: String,
    pub capacity: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
