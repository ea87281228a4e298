use super::entities::StudentDetail;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: StudentDetail,
}

#[derive(Debug, Serialize)]
pub struct CreatedStudentResponse {
    pub student: StudentDetail,
    pub temp_password: String,
}

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<StudentDetail>,
    pub pagination: PaginationInfo,
}
