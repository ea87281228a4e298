use super::entities::Shift;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ClassGroupListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub shift: Option<Shift>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateClassGroupRequest {
    pub name: String,
    pub shift: Shift,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClassGroupRequest {
    pub name: Option<String>,
    pub shift: Option<Shift>,
}

#[derive(Debug, Clone)]
pub struct ClassGroupListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub shift: Option<Shift>,
    pub search: Option<String>,
}
