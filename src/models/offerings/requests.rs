use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OfferingListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    /// Narrow to one class group
    pub turma_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOfferingRequest {
    pub subject_id: i64,
    pub class_group_id: i64,
    #[serde(default)]
    pub workload: i32,
    #[serde(default)]
    pub teacher_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOfferingRequest {
    pub subject_id: Option<i64>,
    pub class_group_id: Option<i64>,
    pub workload: Option<i32>,
    /// Replaces the whole teacher set when present
    pub teacher_ids: Option<Vec<i64>>,
}

// Offering list query for the storage layer
#[derive(Debug, Clone)]
pub struct OfferingListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_group_id: Option<i64>,
    /// Restrict to offerings taught by this teacher
    pub taught_by: Option<i64>,
    /// Restrict to offerings of the class groups of these students
    pub student_ids: Option<Vec<i64>>,
}
