use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AbsenceService;
use crate::access::gate;
use crate::models::absences::requests::{CreateAbsenceRequest, UpdateAbsenceRequest};
use crate::models::absences::responses::AbsenceResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

pub async fn create_absence(
    service: &AbsenceService,
    absence_data: CreateAbsenceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_write_absences(&ctx) {
        return Ok(forbidden());
    }

    // Teachers record attendance only for their own offerings
    if !ctx.account.is_superuser {
        match storage
            .offering_taught_by(absence_data.offering_id, ctx.account.id)
            .await
        {
            Ok(true) => {}
            Ok(false) => return Ok(forbidden()),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check offering ownership: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_absence(absence_data).await {
        Ok(absence) => Ok(HttpResponse::Created().json(ApiResponse::success(
            AbsenceResponse { absence },
            "Absence recorded",
        ))),
        Err(e) => {
            let msg = format!("Absence creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::DuplicateEntry,
                    "This absence has already been recorded",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

async fn check_absence_ownership(
    service: &AbsenceService,
    absence_id: i64,
    request: &HttpRequest,
) -> Result<(), HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Err(resp),
    };

    if !gate::can_write_absences(&ctx) {
        return Err(forbidden());
    }

    if ctx.account.is_superuser {
        return Ok(());
    }

    let absence = match storage.get_absence_by_id(absence_id).await {
        Ok(Some(absence)) => absence,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AbsenceNotFound,
                "Absence not found",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get absence: {e}"),
                )),
            );
        }
    };

    match storage
        .offering_taught_by(absence.offering_id, ctx.account.id)
        .await
    {
        Ok(true) => Ok(()),
        Ok(false) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AbsenceNotFound,
            "Absence not found",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to check absence ownership: {e}"),
            )),
        ),
    }
}

pub async fn update_absence(
    service: &AbsenceService,
    absence_id: i64,
    update_data: UpdateAbsenceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = check_absence_ownership(service, absence_id, request).await {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.update_absence(absence_id, update_data).await {
        Ok(Some(absence)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AbsenceResponse { absence },
            "Absence updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AbsenceNotFound,
            "Absence not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update absence: {e}"),
            )),
        ),
    }
}

pub async fn delete_absence(
    service: &AbsenceService,
    absence_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = check_absence_ownership(service, absence_id, request).await {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.delete_absence(absence_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Absence deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AbsenceNotFound,
            "Absence not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete absence: {e}"),
            )),
        ),
    }
}
