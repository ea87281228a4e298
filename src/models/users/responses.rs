use super::entities::User;
use crate::models::common::PaginationInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

// Returned once on creation; the temporary password is not recoverable later.
#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub user: User,
    pub temp_password: String,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}
