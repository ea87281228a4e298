use serde::{Deserialize, Serialize};

// A subject taught to a class group, with an assigned teacher set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseOffering {
    pub id: i64,
    pub subject_id: i64,
    pub class_group_id: i64,
    pub workload: i32,
    pub teacher_ids: Vec<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
