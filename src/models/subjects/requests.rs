use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubjectListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
}

// Subject list query for the storage layer
#[derive(Debug, Clone)]
pub struct SubjectListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
