use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::reports::responses::{ClassGroupIndicators, DashboardResponse};
use crate::models::students::entities::StudentStatus;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

fn rate(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", part as f64 * 100.0 / whole as f64)
}

pub async fn get_dashboard(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !ctx.is_coordination() {
        return Ok(forbidden());
    }

    let internal = |msg: String| {
        HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg))
    };

    let total_students = match storage.count_students().await {
        Ok(count) => count as i64,
        Err(e) => return Ok(internal(format!("Failed to count students: {e}"))),
    };

    let total_teachers = match storage.count_users_by_role(UserRole::Teacher).await {
        Ok(count) => count as i64,
        Err(e) => return Ok(internal(format!("Failed to count teachers: {e}"))),
    };

    let total_class_groups = match storage.count_class_groups().await {
        Ok(count) => count as i64,
        Err(e) => return Ok(internal(format!("Failed to count class groups: {e}"))),
    };

    let groups = match storage.list_all_class_groups().await {
        Ok(groups) => groups,
        Err(e) => return Ok(internal(format!("Failed to list class groups: {e}"))),
    };

    let mut class_groups = Vec::with_capacity(groups.len());
    for group in groups {
        let profiles = match storage.list_student_profiles_by_group(group.id).await {
            Ok(profiles) => profiles,
            Err(e) => return Ok(internal(format!("Failed to list group students: {e}"))),
        };

        let total = profiles.len();
        let dropped_out = profiles
            .iter()
            .filter(|p| p.status == StudentStatus::DroppedOut)
            .count();

        // Approval is judged over students still on the books: active or
        // completed enrollments with an overall average of at least 6.0
        let graded_ids: Vec<i64> = profiles
            .iter()
            .filter(|p| {
                matches!(p.status, StudentStatus::Active | StudentStatus::Completed)
            })
            .map(|p| p.id)
            .collect();

        let grades = match storage.list_grades_for_students(&graded_ids).await {
            Ok(grades) => grades,
            Err(e) => return Ok(internal(format!("Failed to list group grades: {e}"))),
        };

        let mut sums: HashMap<i64, (f64, i64)> = HashMap::new();
        for grade in &grades {
            let entry = sums.entry(grade.student_id).or_insert((0.0, 0));
            entry.0 += grade.value;
            entry.1 += 1;
        }

        let approved = graded_ids
            .iter()
            .filter(|id| {
                sums.get(id)
                    .is_some_and(|(sum, count)| sum / *count as f64 >= 6.0)
            })
            .count();

        class_groups.push(ClassGroupIndicators {
            class_group: group,
            dropout_rate: rate(dropped_out, total),
            approval_rate: rate(approved, graded_ids.len()),
        });
    }

    let dashboard = DashboardResponse {
        total_students,
        total_teachers,
        total_class_groups,
        class_groups,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        dashboard,
        "Dashboard generated",
    )))
}

#[cfg(test)]
mod tests {
    use super::rate;

    #[test]
    fn rate_formats_two_decimals() {
        assert_eq!(rate(1, 3), "33.33%");
        assert_eq!(rate(2, 2), "100.00%");
    }

    #[test]
    fn rate_survives_empty_groups() {
        assert_eq!(rate(0, 0), "0.00%");
    }
}
