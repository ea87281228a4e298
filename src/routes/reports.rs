use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::ReportService;
use crate::utils::SafeStudentIdI64;

static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn get_performance_report(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .get_performance_report(student_id.0, &req)
        .await
}

pub async fn get_report_card(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.get_report_card(student_id.0, &req).await
}

pub async fn get_dashboard(request: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.get_dashboard(&request).await
}

pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/relatorio-desempenho")
            .wrap(middlewares::RequireJWT)
            .route("/{aluno_id}/", web::get().to(get_performance_report)),
    )
    .service(
        web::scope("/api/boletim")
            .wrap(middlewares::RequireJWT)
            .route("/{aluno_id}/pdf", web::get().to(get_report_card)),
    )
    .service(
        web::scope("/api/dashboard")
            .wrap(middlewares::RequireJWT)
            .route("/", web::get().to(get_dashboard)),
    );
}
