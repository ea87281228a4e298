use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DisciplinaryListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    /// Mandatory for guardian callers
    pub aluno_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWarningRequest {
    pub student_id: i64,
    pub date: chrono::NaiveDate,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWarningRequest {
    pub date: Option<chrono::NaiveDate>,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSuspensionRequest {
    pub student_id: i64,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSuspensionRequest {
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub reason: Option<String>,
}

// Disciplinary list query for the storage layer
#[derive(Debug, Clone)]
pub struct DisciplinaryListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub visible_student_ids: Option<Vec<i64>>,
}
