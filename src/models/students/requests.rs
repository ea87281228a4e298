use super::entities::StudentStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// Student list query parameters
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    /// Narrow to one class group
    pub turma_id: Option<i64>,
    pub search: Option<String>,
}

// Creates the account and the profile together. The temporary password is
// numeric and returned once.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub class_group_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub class_group_id: Option<i64>,
    pub status: Option<StudentStatus>,
}

// Student list query for the storage layer
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_group_id: Option<i64>,
    pub search: Option<String>,
    /// Restrict to these profile ids; None means no restriction
    pub visible_ids: Option<Vec<i64>>,
    /// Restrict to class groups taught by this teacher
    pub taught_by: Option<i64>,
}
