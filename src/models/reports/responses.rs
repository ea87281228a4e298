use crate::models::class_groups::entities::ClassGroup;
use serde::Serialize;

// Per-subject grade average
#[derive(Debug, Clone, Serialize)]
pub struct SubjectAverage {
    pub subject: String,
    pub average: f64,
}

// Performance report for one student
#[derive(Debug, Serialize)]
pub struct PerformanceReport {
    pub student_id: i64,
    pub name: String,
    /// Registration identifier, the account username
    pub registration: String,
    pub class_group_id: Option<i64>,
    pub class_group_name: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_email: Option<String>,
    pub status: String,
    pub subject_averages: Vec<SubjectAverage>,
    pub total_absences: i64,
    pub justified_absences: i64,
}

// One class group's indicators on the management dashboard
#[derive(Debug, Serialize)]
pub struct ClassGroupIndicators {
    pub class_group: ClassGroup,
    /// Formatted with two decimals and a percent sign
    pub dropout_rate: String,
    pub approval_rate: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_class_groups: i64,
    pub class_groups: Vec<ClassGroupIndicators>,
}
