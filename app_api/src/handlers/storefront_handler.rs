use crate::result::OrderLinkResponse;
use actix_web::{Responder, get, web};
use biz_service::biz_service::menu_item_service::MenuItemService;
use biz_service::entitys::menu_item_entity::MenuItemView;
use common::config::OrderConfig;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(categories);
    cfg.service(best_sellers);
    cfg.service(order_link);
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Storefront",
    responses((status = 200, description = "去重后的分类", body = [String]))
)]
#[get("/categories")]
pub async fn categories(menu_service: web::Data<MenuItemService>) -> Result<impl Responder, AppError> {
    Ok(web::Json(menu_service.categories().await?))
}

#[utoipa::path(
    get,
    path = "/bestsellers",
    tag = "Storefront",
    responses((status = 200, description = "招牌菜品", body = [MenuItemView]))
)]
#[get("/bestsellers")]
pub async fn best_sellers(menu_service: web::Data<MenuItemService>) -> Result<impl Responder, AppError> {
    let items = menu_service.best_sellers().await?;
    let views: Vec<MenuItemView> = items.into_iter().map(MenuItemView::from).collect();
    Ok(web::Json(views))
}

#[utoipa::path(
    get,
    path = "/order-link",
    tag = "Storefront",
    responses((status = 200, description = "WhatsApp 下单链接", body = OrderLinkResponse))
)]
#[get("/order-link")]
pub async fn order_link(order: web::Data<OrderConfig>) -> Result<impl Responder, AppError> {
    Ok(web::Json(OrderLinkResponse { url: order.order_link() }))
}
