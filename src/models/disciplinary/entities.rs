use serde::{Deserialize, Serialize};

// Disciplinary warning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub id: i64,
    pub student_id: i64,
    pub date: chrono::NaiveDate,
    pub reason: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// Disciplinary suspension with an inclusive date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suspension {
    pub id: i64,
    pub student_id: i64,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub reason: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
