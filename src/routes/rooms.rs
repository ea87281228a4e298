use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::rooms::requests::{CreateRoomRequest, RoomListParams, UpdateRoomRequest};
use crate::services::RoomService;
use crate::utils::SafeIDI64;

static ROOM_SERVICE: Lazy<RoomService> = Lazy::new(RoomService::new_lazy);

pub async fn list_rooms(
    req: HttpRequest,
    query: web::Query<RoomListParams>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.list_rooms(query.into_inner(), &req).await
}

pub async fn create_room(
    req: HttpRequest,
    room_data: web::Json<CreateRoomRequest>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.create_room(room_data.into_inner(), &req).await
}

pub async fn get_room(req: HttpRequest, room_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.get_room(room_id.0, &req).await
}

pub async fn update_room(
    req: HttpRequest,
    room_id: SafeIDI64,
    update_data: web::Json<UpdateRoomRequest>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE
        .update_room(room_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_room(req: HttpRequest, room_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.delete_room(room_id.0, &req).await
}

pub fn configure_room_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/salas")
            .wrap(middlewares::RequireJWT)
            .route("/", web::get().to(list_rooms))
            .route("/", web::post().to(create_room))
            .route("/{id}/", web::get().to(get_room))
            .route("/{id}/", web::put().to(update_room))
            .route("/{id}/", web::delete().to(delete_room)),
    );
}
