use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GuardianListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// Creates the account and the profile together; the temporary password is
// returned once.
#[derive(Debug, Deserialize)]
pub struct CreateGuardianRequest {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub student_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGuardianRequest {
    pub phone: Option<String>,
    /// Replaces the whole linked-student set when present
    pub student_ids: Option<Vec<i64>>,
}

// Guardian list query for the storage layer
#[derive(Debug, Clone)]
pub struct GuardianListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
