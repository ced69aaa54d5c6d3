use crate::result::StatusResponse;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use common::errors::AppError;
use log::debug;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(status);
}

#[utoipa::path(
    get,
    path = "/status",
    tag = "Common",
    summary = "Get the status of the service",
    responses(
        (status = 200, description = "服务正常", body = StatusResponse)
    )
)]
#[get("/status")]
pub async fn status() -> Result<impl Responder, AppError> {
    Ok(web::Json(StatusResponse { status: "ok".to_string() }))
}

/// 未匹配路由：OPTIONS 预检直接放行，其余返回 404
pub async fn fallback(req: HttpRequest) -> Result<HttpResponse, AppError> {
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }
    debug!("route not found: {} {}", req.method(), req.path());
    Err(AppError::RouteNotFound)
}
