use serde::{Deserialize, Serialize};

// Guardian profile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardianProfile {
    pub id: i64,
    pub user_id: i64,
    pub phone: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// Profile joined with its account and linked students
#[derive(Debug, Clone, Serialize)]
pub struct GuardianDetail {
    pub profile: GuardianProfile,
    pub user: crate::models::users::entities::User,
    pub students: Vec<crate::models::students::entities::StudentDetail>,
}
