pub mod common_handler;
pub mod menu_handler;
pub mod seed_handler;
pub mod storefront_handler;
pub mod swagger;

use actix_web::web;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // 请求体、查询参数解析失败统一返回 400 JSON，不强制要求 Content-Type
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _req| AppError::InvalidBody(err.to_string()).into()),
    );
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| AppError::InvalidBody(err.to_string()).into()));
    swagger::configure(cfg);
    common_handler::configure(cfg);
    menu_handler::configure(cfg);
    seed_handler::configure(cfg);
    storefront_handler::configure(cfg);
}
