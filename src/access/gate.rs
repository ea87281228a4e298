//! Coarse per-action allow/deny checks, consulted before any data access.
//!
//! Composite rules are plain boolean ORs over atomic role predicates,
//! evaluated eagerly. Denial maps to a 403 in the routes; a gate never
//! touches storage.

use crate::access::context::CallerContext;

/// Account CRUD is reserved for the coordination family.
pub fn can_manage_accounts(ctx: &CallerContext) -> bool {
    ctx.is_coordination()
}

/// Class groups, subjects and course offerings share the same write rule.
pub fn can_manage_catalog(ctx: &CallerContext) -> bool {
    ctx.is_coordination()
}

/// Grade writes: teachers (scoped to their offerings) or coordination.
pub fn can_write_grades(ctx: &CallerContext) -> bool {
    let teacher = ctx.is_teacher();
    let coordination = ctx.is_coordination();
    teacher || coordination
}

/// Absence writes are a teacher action.
pub fn can_write_absences(ctx: &CallerContext) -> bool {
    ctx.is_teacher() || ctx.account.is_superuser
}

/// Warnings and suspensions are issued by coordination only.
pub fn can_write_disciplinary(ctx: &CallerContext) -> bool {
    ctx.is_coordination()
}

/// Guardian profile CRUD is coordination-only; the portal read is gated
/// separately by [`can_use_guardian_portal`].
pub fn can_manage_guardians(ctx: &CallerContext) -> bool {
    ctx.is_coordination()
}

pub fn can_use_guardian_portal(ctx: &CallerContext) -> bool {
    ctx.is_guardian()
}

/// Room registry writes; everyone may browse rooms.
pub fn can_manage_rooms(ctx: &CallerContext) -> bool {
    ctx.is_coordination()
}

/// Any authenticated caller may reserve a room for themselves; changing
/// or cancelling reservations is coordination-only.
pub fn can_modify_reservations(ctx: &CallerContext) -> bool {
    ctx.is_coordination()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::context::CallerContext;
    use crate::models::users::entities::{User, UserRole, UserStatus};
    use chrono::Utc;

    fn ctx(role: UserRole) -> CallerContext {
        CallerContext::bare(User {
            id: 7,
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

    #[test]
    fn account_management_is_coordination_only() {
        assert!(can_manage_accounts(&ctx(UserRole::Coordinator)));
        assert!(can_manage_accounts(&ctx(UserRole::ItStaff)));
        assert!(!can_manage_accounts(&ctx(UserRole::Teacher)));
        assert!(!can_manage_accounts(&ctx(UserRole::Student)));
        assert!(!can_manage_accounts(&ctx(UserRole::Guardian)));
    }

    #[test]
    fn grade_writes_accept_teacher_or_coordination() {
        assert!(can_write_grades(&ctx(UserRole::Teacher)));
        assert!(can_write_grades(&ctx(UserRole::Admin)));
        assert!(!can_write_grades(&ctx(UserRole::Student)));
        assert!(!can_write_grades(&ctx(UserRole::Guardian)));
    }

    #[test]
    fn absence_writes_are_teacher_only() {
        assert!(can_write_absences(&ctx(UserRole::Teacher)));
        assert!(!can_write_absences(&ctx(UserRole::Coordinator)));
        assert!(!can_write_absences(&ctx(UserRole::Student)));
    }

    #[test]
    fn superuser_passes_coordination_gates() {
        let mut caller = ctx(UserRole::Teacher);
        caller.account.is_superuser = true;
        assert!(can_manage_accounts(&caller));
        assert!(can_write_disciplinary(&caller));
        assert!(can_modify_reservations(&caller));
    }

    #[test]
    fn disciplinary_writes_are_coordination_only() {
        assert!(can_write_disciplinary(&ctx(UserRole::Director)));
        assert!(!can_write_disciplinary(&ctx(UserRole::Teacher)));
        assert!(!can_write_disciplinary(&ctx(UserRole::Guardian)));
    }

    #[test]
    fn guardian_portal_is_guardian_only() {
        assert!(can_use_guardian_portal(&ctx(UserRole::Guardian)));
        assert!(!can_use_guardian_portal(&ctx(UserRole::Admin)));
    }
}
