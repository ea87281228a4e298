use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AbsenceListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub aluno_id: Option<i64>,
    pub disciplina_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAbsenceRequest {
    pub student_id: i64,
    pub offering_id: i64,
    pub date: chrono::NaiveDate,
    #[serde(default)]
    pub justified: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAbsenceRequest {
    pub date: Option<chrono::NaiveDate>,
    pub justified: Option<bool>,
}

// Absence list query for the storage layer
#[derive(Debug, Clone)]
pub struct AbsenceListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub offering_id: Option<i64>,
    pub visible_student_ids: Option<Vec<i64>>,
    pub taught_by: Option<i64>,
}
