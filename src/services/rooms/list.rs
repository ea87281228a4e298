use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoomService;
use crate::models::rooms::requests::{RoomListParams, RoomListQuery};
use crate::models::rooms::responses::RoomResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_rooms(
    service: &RoomService,
    query: RoomListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = RoomListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
    };

    match storage.list_rooms_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Room list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve room list: {e}"),
            )),
        ),
    }
}

pub async fn get_room(
    service: &RoomService,
    room_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_room_by_id(room_id).await {
        Ok(Some(room)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RoomResponse { room },
            "Room retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RoomNotFound,
            "Room not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get room: {e}"),
            )),
        ),
    }
}
