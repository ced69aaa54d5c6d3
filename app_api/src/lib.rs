pub mod handlers;
pub mod result;

use actix_web::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN};
use actix_web::middleware::DefaultHeaders;

/// 所有响应（包括错误与预检）都带上宽松的跨域头
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, DELETE, OPTIONS"))
        .add((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}
