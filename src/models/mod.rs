//! Business models: entities, request payloads and response payloads.

pub mod absences;
pub mod auth;
pub mod class_groups;
pub mod common;
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

pub use common::pagination::PaginationInfo;
pub use common::response::ApiResponse;

/// Wall-clock instant the process started, kept in app data.
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// Business status codes carried in the response envelope.
///
/// The first three digits mirror the HTTP status class, the last two
/// distinguish causes within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    UserNameInvalid = 40001,
    UserEmailInvalid = 40002,
    UserPasswordInvalid = 40003,
    DuplicateEntry = 40010,
    ReservationConflict = 40011,

    Unauthorized = 40100,
    AuthFailed = 40101,
    ResetCodeInvalid = 40102,
    ResetCodeExpired = 40103,

    Forbidden = 40300,
    CanNotDeleteCurrentUser = 40301,

    NotFound = 40400,
    UserNotFound = 40401,
    StudentNotFound = 40402,
    ClassGroupNotFound = 40403,
    SubjectNotFound = 40404,
    OfferingNotFound = 40405,
    GradeNotFound = 40406,
    AbsenceNotFound = 40407,
    GuardianNotFound = 40408,
    RoomNotFound = 40409,
    ReservationNotFound = 40410,

    UserAlreadyExists = 40900,

    InternalServerError = 50000,
    UserCreationFailed = 50001,
    UserUpdateFailed = 50002,
    UserDeleteFailed = 50003,
    MailSendFailed = 50010,
    ReportRenderFailed = 50011,
}
