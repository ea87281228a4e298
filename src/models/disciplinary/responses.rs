use super::entities::{Suspension, Warning};
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WarningResponse {
    pub warning: Warning,
}

#[derive(Debug, Serialize)]
pub struct WarningListResponse {
    pub items: Vec<Warning>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize)]
pub struct SuspensionResponse {
    pub suspension: Suspension,
}

#[derive(Debug, Serialize)]
pub struct SuspensionListResponse {
    pub items: Vec<Suspension>,
    pub pagination: PaginationInfo,
}
