use super::entities::Grade;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GradeResponse {
    pub grade: Grade,
}

#[derive(Debug, Serialize)]
pub struct GradeListResponse {
    pub items: Vec<Grade>,
    pub pagination: PaginationInfo,
}

// Partial-failure payload of the bulk upsert. Serialized verbatim: the
// client contract predates the response envelope.
#[derive(Debug, Serialize)]
pub struct BulkGradeOutcome {
    pub sucesso: Vec<Grade>,
    pub erros: Vec<String>,
}
