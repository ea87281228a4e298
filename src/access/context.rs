use std::sync::Arc;

use crate::errors::Result;
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

/// Everything the scoping rules need to know about the caller, resolved
/// once per request.
///
/// `student_profile_id` is set only for student accounts that have a
/// profile; `guardian_student_ids` only for guardian accounts with at
/// least one linked student.
#[derive(Debug, Clone)]
pub struct CallerContext {
    pub account: User,
    pub student_profile_id: Option<i64>,
    pub guardian_student_ids: Vec<i64>,
}

impl CallerContext {
    /// Builds a context without touching storage. Suitable for admin
    /// family and teacher callers, whose scoping never needs profile
    /// lookups, and for tests.
    pub fn bare(account: User) -> Self {
        Self {
            account,
            student_profile_id: None,
            guardian_student_ids: Vec::new(),
        }
    }

    /// Resolves the caller's profile links from storage.
    pub async fn load(account: User, storage: &Arc<dyn Storage>) -> Result<Self> {
        let mut ctx = Self::bare(account);

        match ctx.account.role {
            UserRole::Student => {
                ctx.student_profile_id = storage
                    .get_student_by_user_id(ctx.account.id)
                    .await?
                    .map(|profile| profile.id);
            }
            UserRole::Guardian => {
                ctx.guardian_student_ids =
                    storage.list_guardian_student_ids(ctx.account.id).await?;
            }
            _ => {}
        }

        Ok(ctx)
    }

    /// Admin family role or superuser flag.
    pub fn is_coordination(&self) -> bool {
        self.account.is_coordination()
    }

    pub fn is_teacher(&self) -> bool {
        self.account.role == UserRole::Teacher
    }

    pub fn is_student(&self) -> bool {
        self.account.role == UserRole::Student
    }

    pub fn is_guardian(&self) -> bool {
        self.account.role == UserRole::Guardian
    }
}
