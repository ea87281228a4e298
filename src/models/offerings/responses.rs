use super::entities::CourseOffering;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OfferingResponse {
    pub offering: CourseOffering,
}

#[derive(Debug, Serialize)]
pub struct OfferingListResponse {
    pub items: Vec<CourseOffering>,
    pub pagination: PaginationInfo,
}
