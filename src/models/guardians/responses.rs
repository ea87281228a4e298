use super::entities::GuardianDetail;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GuardianResponse {
    pub guardian: GuardianDetail,
}

#[derive(Debug, Serialize)]
pub struct CreatedGuardianResponse {
    pub guardian: GuardianDetail,
    pub temp_password: String,
}

#[derive(Debug, Serialize)]
pub struct GuardianListResponse {
    pub items: Vec<GuardianDetail>,
    pub pagination: PaginationInfo,
}
