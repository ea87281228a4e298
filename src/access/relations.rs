//! Record-level relationship checks for the detail and update paths the
//! set-level scoper cannot cover.
//!
//! Each check is a plain traversal over data already loaded by the
//! caller and returns false when an expected profile is missing.

use crate::access::context::CallerContext;
use crate::models::offerings::entities::CourseOffering;

/// True when the record's student reference is the caller's own profile.
pub fn is_own_record(ctx: &CallerContext, record_student_id: i64) -> bool {
    ctx.student_profile_id == Some(record_student_id)
}

/// True when the caller is in the offering's teacher set.
pub fn teaches_offering(ctx: &CallerContext, offering: &CourseOffering) -> bool {
    offering.teacher_ids.contains(&ctx.account.id)
}

/// True when the student is linked to the calling guardian.
pub fn is_guardian_of(ctx: &CallerContext, student_id: i64) -> bool {
    ctx.guardian_student_ids.contains(&student_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{User, UserRole, UserStatus};
    use chrono::Utc;

    fn ctx(role: UserRole) -> CallerContext {
        CallerContext::bare(User {
            id: 3,
            username: "caller".into(),
            email: "caller@example.com".into(),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            is_superuser: false,
            first_name: None,
            last_name: None,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    fn offering(teacher_ids: Vec<i64>) -> CourseOffering {
        CourseOffering {
            id: 1,
            subject_id: 1,
            class_group_id: 1,
            workload: 60,
            teacher_ids,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn own_record_is_reflexive_on_profile_id() {
        let mut caller = ctx(UserRole::Student);
        caller.student_profile_id = Some(42);
        assert!(is_own_record(&caller, 42));
        assert!(!is_own_record(&caller, 43));
    }

    #[test]
    fn own_record_is_false_without_a_profile() {
        let caller = ctx(UserRole::Teacher);
        assert!(!is_own_record(&caller, 42));
    }

    #[test]
    fn teaches_offering_checks_the_teacher_set() {
        let caller = ctx(UserRole::Teacher);
        assert!(teaches_offering(&caller, &offering(vec![3, 8])));
        assert!(!teaches_offering(&caller, &offering(vec![8])));
        assert!(!teaches_offering(&caller, &offering(Vec::new())));
    }

    #[test]
    fn guardian_link_checks_the_linked_set() {
        let mut caller = ctx(UserRole::Guardian);
        caller.guardian_student_ids = vec![10, 11];
        assert!(is_guardian_of(&caller, 10));
        assert!(!is_guardian_of(&caller, 12));
    }
}
