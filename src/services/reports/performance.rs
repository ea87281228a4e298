use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::access::{CallerContext, relations};
use crate::models::reports::responses::{PerformanceReport, SubjectAverage};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::load_caller;
use crate::storage::Storage;

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::StudentNotFound,
        "Student not found",
    ))
}

fn internal(msg: String) -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg))
}

// Reports are open to staff; students and guardians only reach their own
fn report_allowed(ctx: &CallerContext, student_id: i64) -> bool {
    if ctx.is_coordination() || ctx.is_teacher() {
        return true;
    }
    if ctx.is_student() {
        return relations::is_own_record(ctx, student_id);
    }
    relations::is_guardian_of(ctx, student_id)
}

async fn build_report(
    storage: &std::sync::Arc<dyn Storage>,
    student_id: i64,
) -> Result<Option<PerformanceReport>, HttpResponse> {
    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(None),
        Err(e) => return Err(internal(format!("Failed to get student: {e}"))),
    };

    let class_group_name = match student.profile.class_group_id {
        Some(group_id) => match storage.get_class_group_by_id(group_id).await {
            Ok(group) => group.map(|g| g.name),
            Err(e) => return Err(internal(format!("Failed to get class group: {e}"))),
        },
        None => None,
    };

    let (guardian_name, guardian_email) = match storage.get_guardian_for_student(student_id).await {
        Ok(Some((_, guardian_user))) => {
            (Some(guardian_user.full_name()), Some(guardian_user.email))
        }
        Ok(None) => (None, None),
        Err(e) => return Err(internal(format!("Failed to get guardian: {e}"))),
    };

    let grades = match storage.list_grades_for_students(&[student_id]).await {
        Ok(grades) => grades,
        Err(e) => return Err(internal(format!("Failed to list grades: {e}"))),
    };

    // Grades hang off offerings; the subject name comes through that join
    let mut offering_ids: Vec<i64> = grades.iter().map(|g| g.offering_id).collect();
    offering_ids.sort_unstable();
    offering_ids.dedup();

    let offerings = match storage.list_offerings_by_ids(&offering_ids).await {
        Ok(offerings) => offerings,
        Err(e) => return Err(internal(format!("Failed to list offerings: {e}"))),
    };
    let subject_by_offering: HashMap<i64, i64> =
        offerings.iter().map(|o| (o.id, o.subject_id)).collect();

    let mut subject_ids: Vec<i64> = offerings.iter().map(|o| o.subject_id).collect();
    subject_ids.sort_unstable();
    subject_ids.dedup();

    let subjects = match storage.list_subjects_by_ids(&subject_ids).await {
        Ok(subjects) => subjects,
        Err(e) => return Err(internal(format!("Failed to list subjects: {e}"))),
    };
    let subject_names: HashMap<i64, String> =
        subjects.into_iter().map(|s| (s.id, s.name)).collect();

    let mut sums: HashMap<i64, (f64, i64)> = HashMap::new();
    for grade in &grades {
        if let Some(&subject_id) = subject_by_offering.get(&grade.offering_id) {
            let entry = sums.entry(subject_id).or_insert((0.0, 0));
            entry.0 += grade.value;
            entry.1 += 1;
        }
    }

    let mut subject_averages: Vec<SubjectAverage> = sums
        .into_iter()
        .filter_map(|(subject_id, (sum, count))| {
            subject_names.get(&subject_id).map(|name| SubjectAverage {
                subject: name.clone(),
                average: sum / count as f64,
            })
        })
        .collect();
    subject_averages.sort_by(|a, b| a.subject.cmp(&b.subject));

    let absences = match storage.list_absences_for_student(student_id).await {
        Ok(absences) => absences,
        Err(e) => return Err(internal(format!("Failed to list absences: {e}"))),
    };
    let justified_absences = absences.iter().filter(|a| a.justified).count() as i64;

    Ok(Some(PerformanceReport {
        student_id: student.profile.id,
        name: student.user.full_name(),
        registration: student.user.username.clone(),
        class_group_id: student.profile.class_group_id,
        class_group_name,
        guardian_name,
        guardian_email,
        status: student.profile.status.to_string(),
        subject_averages,
        total_absences: absences.len() as i64,
        justified_absences,
    }))
}

pub async fn get_performance_report(
    service: &ReportService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !report_allowed(&ctx, student_id) {
        return Ok(not_found());
    }

    match build_report(&storage, student_id).await {
        Ok(Some(report)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            report,
            "Performance report generated",
        ))),
        Ok(None) => Ok(not_found()),
        Err(resp) => Ok(resp),
    }
}

pub async fn get_report_card(
    service: &ReportService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !report_allowed(&ctx, student_id) {
        return Ok(not_found());
    }

    let report = match build_report(&storage, student_id).await {
        Ok(Some(report)) => report,
        Ok(None) => return Ok(not_found()),
        Err(resp) => return Ok(resp),
    };

    let renderer = service.get_renderer(request);
    match renderer.render(&report) {
        Ok((bytes, mime)) => Ok(HttpResponse::Ok().content_type(mime).body(bytes)),
        Err(e) => {
            error!("Report card rendering failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReportRenderFailed,
                    format!("Report card rendering failed: {e}"),
                )),
            )
        }
    }
}
