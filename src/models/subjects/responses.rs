use super::entities::Subject;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub subject: Subject,
}

#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub items: Vec<Subject>,
    pub pagination: PaginationInfo,
}
