use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::RoomService;
use crate::access::gate;
use crate::models::rooms::requests::{CreateRoomRequest, UpdateRoomRequest};
use crate::models::rooms::responses::RoomResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{forbidden, load_caller};

pub async fn create_room(
    service: &RoomService,
    room_data: CreateRoomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_rooms(&ctx) {
        return Ok(forbidden());
    }

    match storage.create_room(room_data).await {
        Ok(room) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(RoomResponse { room }, "Room created"))),
        Err(e) => {
            let msg = format!("Room creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::DuplicateEntry,
                    "A room with this name already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

pub async fn update_room(
    service: &RoomService,
    room_id: i64,
    update_data: UpdateRoomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_rooms(&ctx) {
        return Ok(forbidden());
    }

    match storage.update_room(room_id, update_data).await {
        Ok(Some(room)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RoomResponse { room },
            "Room updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RoomNotFound,
            "Room not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update room: {e}"),
            )),
        ),
    }
}

pub async fn delete_room(
    service: &RoomService,
    room_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_manage_rooms(&ctx) {
        return Ok(forbidden());
    }

    match storage.delete_room(room_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Room deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RoomNotFound,
            "Room not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete room: {e}"),
            )),
        ),
    }
}
