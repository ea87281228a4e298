use serde::{Deserialize, Serialize};

// Grade entity. One row per (student, offering, term).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub offering_id: i64,
    /// Grading period label, e.g. "1º Bimestre"
    pub term: String,
    pub value: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
