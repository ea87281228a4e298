use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::class_groups::requests::{
    ClassGroupListParams, CreateClassGroupRequest, UpdateClassGroupRequest,
};
use crate::services::ClassGroupService;
use crate::utils::SafeIDI64;

static CLASS_GROUP_SERVICE: Lazy<ClassGroupService> = Lazy::new(ClassGroupService::new_lazy);

pub async fn list_class_groups(
    req: HttpRequest,
    query: web::Query<ClassGroupListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_GROUP_SERVICE
        .list_class_groups(query.into_inner(), &req)
        .await
}

pub async fn create_class_group(
    req: HttpRequest,
    group_data: web::Json<CreateClassGroupRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_GROUP_SERVICE
        .create_class_group(group_data.into_inner(), &req)
        .await
}

pub async fn get_class_group(req: HttpRequest, group_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_GROUP_SERVICE.get_class_group(group_id.0, &req).await
}

pub async fn get_class_group_with_students(
    req: HttpRequest,
    group_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASS_GROUP_SERVICE
        .get_class_group_with_students(group_id.0, &req)
        .await
}

pub async fn update_class_group(
    req: HttpRequest,
    group_id: SafeIDI64,
    update_data: web::Json<UpdateClassGroupRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_GROUP_SERVICE
        .update_class_group(group_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_class_group(
    req: HttpRequest,
    group_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASS_GROUP_SERVICE.delete_class_group(group_id.0, &req).await
}

pub fn configure_class_group_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/turmas")
            .wrap(middlewares::RequireJWT)
            .route("/", web::get().to(list_class_groups))
            .route("/", web::post().to(create_class_group))
            .route("/{id}/", web::get().to(get_class_group))
            .route(
                "/{id}/detalhe_com_alunos/",
                web::get().to(get_class_group_with_students),
            )
            .route("/{id}/", web::put().to(update_class_group))
            .route("/{id}/", web::delete().to(delete_class_group)),
    );
}
