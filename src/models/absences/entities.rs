use serde::{Deserialize, Serialize};

// Absence entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Absence {
    pub id: i64,
    pub student_id: i64,
    pub offering_id: i64,
    pub date: chrono::NaiveDate,
    pub justified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
