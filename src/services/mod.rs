pub mod absences;
pub mod auth;
pub mod class_groups;
pub mod disciplinary;
pub mod grades;
pub mod guardians;
pub mod offerings;
pub mod reports;
pub mod reservations;
pub mod rooms;
pub mod students;
pub mod subjects;
pub mod users;

pub use absences::AbsenceService;
pub use auth::AuthService;
pub use class_groups::ClassGroupService;
pub use disciplinary::DisciplinaryService;
pub use grades::GradeService;
pub use guardians::GuardianService;
pub use offerings::OfferingService;
pub use reports::ReportService;
pub use reservations::ReservationService;
pub use rooms::RoomService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::access::CallerContext;
use crate::middlewares::require_jwt::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// Resolves the authenticated caller and its profile links. The error
/// branch carries the finished response, so handlers can `return Ok(resp)`
/// directly.
pub(crate) async fn load_caller(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
) -> Result<CallerContext, HttpResponse> {
    let Some(account) = RequireJWT::extract_user_claims(request) else {
        return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    CallerContext::load(account, storage).await.map_err(|e| {
        tracing::error!("Caller context resolution failed: {}", e);
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            "Failed to resolve caller context",
        ))
    })
}

/// 403 with the standard envelope.
pub(crate) fn forbidden() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::Forbidden,
        "Access denied.",
    ))
}
