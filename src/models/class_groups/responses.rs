use super::entities::ClassGroup;
use crate::models::common::PaginationInfo;
use crate::models::students::entities::StudentDetail;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClassGroupResponse {
    pub class_group: ClassGroup,
}

#[derive(Debug, Serialize)]
pub struct ClassGroupListResponse {
    pub items: Vec<ClassGroup>,
    pub pagination: PaginationInfo,
}

// detalhe_com_alunos: the group plus its full roster
#[derive(Debug, Serialize)]
pub struct ClassGroupWithStudents {
    pub class_group: ClassGroup,
    pub students: Vec<StudentDetail>,
}
