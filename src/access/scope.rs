use crate::access::context::CallerContext;
use crate::models::users::entities::UserRole;

/// The visible subset of a record family for one caller.
///
/// Services translate this into query filters; `Nothing` short-circuits
/// to an empty page without touching storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// No restriction. Explicit query filters still apply.
    All,
    /// Records of the caller's own student profile.
    OwnStudent(i64),
    /// Records of an explicit set of student profiles.
    Students(Vec<i64>),
    /// Records tied to course offerings taught by this account.
    TaughtBy(i64),
    /// Empty set. Missing profiles and unmatched filters land here, never
    /// an error.
    Nothing,
}

impl Visibility {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Visibility::Nothing)
    }

    /// The student-profile restriction, when this visibility is one.
    pub fn student_ids(&self) -> Option<Vec<i64>> {
        match self {
            Visibility::OwnStudent(id) => Some(vec![*id]),
            Visibility::Students(ids) => Some(ids.clone()),
            _ => None,
        }
    }
}

/// Scopes entities carrying a student reference: profiles, grades and
/// absences.
///
/// Guardians must name one of their linked students through the explicit
/// `requested_student` filter; without it they see nothing. For the other
/// roles the filter is a plain query narrowing applied by the service, so
/// it is ignored here.
pub fn student_records(ctx: &CallerContext, requested_student: Option<i64>) -> Visibility {
    if ctx.account.is_superuser {
        return Visibility::All;
    }
    match ctx.account.role {
        UserRole::Admin
        | UserRole::Coordinator
        | UserRole::Director
        | UserRole::ItStaff => Visibility::All,
        UserRole::Teacher => Visibility::TaughtBy(ctx.account.id),
        UserRole::Student => match ctx.student_profile_id {
            Some(profile_id) => Visibility::OwnStudent(profile_id),
            None => Visibility::Nothing,
        },
        UserRole::Guardian => match requested_student {
            Some(student_id) if ctx.guardian_student_ids.contains(&student_id) => {
                Visibility::Students(vec![student_id])
            }
            _ => Visibility::Nothing,
        },
    }
}

/// Scopes warnings and suspensions. Same shape as [`student_records`]
/// except teachers see every record: disciplinary entries are not tied to
/// a course offering.
pub fn disciplinary_records(ctx: &CallerContext, requested_student: Option<i64>) -> Visibility {
    match ctx.account.role {
        UserRole::Teacher => Visibility::All,
        _ => student_records(ctx, requested_student),
    }
}

/// Scopes course offerings. Students see their class group's offerings,
/// teachers their own, guardians none (the portal endpoints cover their
/// reads).
pub fn offerings(ctx: &CallerContext) -> Visibility {
    if ctx.account.is_superuser {
        return Visibility::All;
    }
    match ctx.account.role {
        UserRole::Admin
        | UserRole::Coordinator
        | UserRole::Director
        | UserRole::ItStaff => Visibility::All,
        UserRole::Teacher => Visibility::TaughtBy(ctx.account.id),
        UserRole::Student => match ctx.student_profile_id {
            Some(profile_id) => Visibility::OwnStudent(profile_id),
            None => Visibility::Nothing,
        },
        UserRole::Guardian => Visibility::Nothing,
    }
}

/// Room reservations are scoped by owning account, not by student.
/// Returns the owner filter: `None` means unrestricted.
pub fn reservation_owner(ctx: &CallerContext) -> Option<i64> {
    if ctx.is_coordination() {
        None
    } else {
        Some(ctx.account.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{User, UserStatus};
    use chrono::Utc;

    fn account(id: i64, role: UserRole) -> User {
        User {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            is_superuser: false,
            first_name: Some("Test".into()),
            last_name: Some("User".into()),
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn ctx(role: UserRole) -> CallerContext {
        CallerContext::bare(account(1, role))
    }

    #[test]
    fn coordination_roles_see_everything() {
        for role in UserRole::admin_roles() {
            let role = **role;
            assert_eq!(student_records(&ctx(role), None), Visibility::All);
            assert_eq!(offerings(&ctx(role)), Visibility::All);
            assert_eq!(reservation_owner(&ctx(role)), None);
        }
    }

    #[test]
    fn superuser_flag_overrides_field_role() {
        let mut caller = ctx(UserRole::Teacher);
        caller.account.is_superuser = true;
        assert_eq!(student_records(&caller, None), Visibility::All);
        assert_eq!(offerings(&caller), Visibility::All);
        assert_eq!(reservation_owner(&caller), None);
    }

    #[test]
    fn teacher_is_scoped_to_taught_offerings() {
        let caller = ctx(UserRole::Teacher);
        assert_eq!(student_records(&caller, None), Visibility::TaughtBy(1));
        assert_eq!(offerings(&caller), Visibility::TaughtBy(1));
    }

    #[test]
    fn teacher_sees_all_disciplinary_records() {
        assert_eq!(
            disciplinary_records(&ctx(UserRole::Teacher), None),
            Visibility::All
        );
    }

    #[test]
    fn student_sees_own_profile_records() {
        let mut caller = ctx(UserRole::Student);
        caller.student_profile_id = Some(42);
        assert_eq!(student_records(&caller, None), Visibility::OwnStudent(42));
        assert_eq!(offerings(&caller), Visibility::OwnStudent(42));
    }

    #[test]
    fn student_without_profile_fails_closed() {
        let caller = ctx(UserRole::Student);
        assert_eq!(student_records(&caller, None), Visibility::Nothing);
        assert_eq!(offerings(&caller), Visibility::Nothing);
        assert_eq!(disciplinary_records(&caller, None), Visibility::Nothing);
    }

    #[test]
    fn guardian_without_student_filter_sees_nothing() {
        let mut caller = ctx(UserRole::Guardian);
        caller.guardian_student_ids = vec![10, 11];
        assert_eq!(student_records(&caller, None), Visibility::Nothing);
        assert_eq!(disciplinary_records(&caller, None), Visibility::Nothing);
    }

    #[test]
    fn guardian_filter_must_match_a_linked_student() {
        let mut caller = ctx(UserRole::Guardian);
        caller.guardian_student_ids = vec![10, 11];
        assert_eq!(
            student_records(&caller, Some(10)),
            Visibility::Students(vec![10])
        );
        assert_eq!(student_records(&caller, Some(99)), Visibility::Nothing);
    }

    #[test]
    fn guardian_never_sees_offerings_directly() {
        let mut caller = ctx(UserRole::Guardian);
        caller.guardian_student_ids = vec![10];
        assert_eq!(offerings(&caller), Visibility::Nothing);
    }

    #[test]
    fn reservations_default_to_own_records() {
        for role in [UserRole::Teacher, UserRole::Student, UserRole::Guardian] {
            assert_eq!(reservation_owner(&ctx(role)), Some(1));
        }
    }

    #[test]
    fn visibility_student_ids_projection() {
        assert_eq!(Visibility::OwnStudent(5).student_ids(), Some(vec![5]));
        assert_eq!(
            Visibility::Students(vec![1, 2]).student_ids(),
            Some(vec![1, 2])
        );
        assert_eq!(Visibility::All.student_ids(), None);
        assert!(Visibility::Nothing.is_nothing());
    }
}
