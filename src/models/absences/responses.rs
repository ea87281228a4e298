use super::entities::Absence;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AbsenceResponse {
    pub absence: Absence,
}

#[derive(Debug, Serialize)]
pub struct AbsenceListResponse {
    pub items: Vec<Absence>,
    pub pagination: PaginationInfo,
}
