use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::access::gate;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::CreateStudentRequest, responses::CreatedStudentResponse},
    users::entities::UserRole,
    users::requests::CreateUserRequest,
};
use crate::services::{forbidden, load_caller};
use crate::utils::password::hash_password;
use crate::utils::random::generate_student_temp_password;
use crate::utils::validate::{validate_email, validate_username};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_accounts(&ctx) {
        return Ok(forbidden());
    }

    if let Err(msg) = validate_username(&student_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // Numeric so the secretariat can dictate it over the phone
    let temp_password = generate_student_temp_password();
    let password_hash = match hash_password(&temp_password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let account_request = CreateUserRequest {
        username: student_data.username,
        email: student_data.email,
        role: UserRole::Student,
        first_name: student_data.first_name,
        last_name: student_data.last_name,
    };

    let user = match storage.create_user(account_request, &password_hash).await {
        Ok(user) => user,
        Err(e) => {
            let msg = format!("Student account creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Username or email already exists",
                )));
            }
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::UserCreationFailed, msg)));
        }
    };

    let profile = match storage
        .create_student_profile(user.id, student_data.class_group_id)
        .await
    {
        Ok(profile) => profile,
        Err(e) => {
            error!("Student profile creation failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student profile creation failed: {e}"),
                )),
            );
        }
    };

    match storage.get_student_by_id(profile.id).await {
        Ok(Some(student)) => Ok(HttpResponse::Created().json(ApiResponse::success(
            CreatedStudentResponse {
                student,
                temp_password,
            },
            "Student created",
        ))),
        Ok(None) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Student profile vanished after creation",
            )),
        ),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load created student: {e}"),
            )),
        ),
    }
}
