use crate::result::{ErrorResponse, SeedResponse, result_seed};
use actix_web::{Responder, post, web};
use biz_service::biz_service::menu_item_service::MenuItemService;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(seed);
}

/// 管理操作：清空菜单并写入固定初始数据
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Admin",
    responses(
        (status = 200, description = "初始化成功", body = SeedResponse),
        (status = 500, description = "服务内部错误", body = ErrorResponse)
    )
)]
#[post("/seed")]
pub async fn seed(menu_service: web::Data<MenuItemService>) -> Result<impl Responder, AppError> {
    let count = menu_service.seed().await?;
    Ok(web::Json(result_seed(count)))
}
