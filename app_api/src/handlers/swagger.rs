use crate::handlers::common_handler::*;
use crate::handlers::menu_handler::*;
use crate::handlers::seed_handler::*;
use crate::handlers::storefront_handler::*;
use crate::result::{ErrorResponse, MessageResponse, OrderLinkResponse, SeedResponse, StatusResponse};
use actix_web::{Responder, get, web};
use biz_service::dto::menu_item_dto::{CreateMenuItemDto, UpdateMenuItemDto};
use biz_service::entitys::menu_item_entity::MenuItemView;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        //菜单
        menu_list,
        menu_create,
        menu_get,
        menu_update,
        menu_delete,
        //管理
        seed,
        //门店
        categories,
        best_sellers,
        order_link,
        //通用
        status,
    ),
    components(schemas(
        MenuItemView,
        CreateMenuItemDto,
        UpdateMenuItemDto,
        MessageResponse,
        SeedResponse,
        ErrorResponse,
        OrderLinkResponse,
        StatusResponse,
    )),
    tags(
        (name = "Menu", description = "菜单增删改查"),
        (name = "Admin", description = "数据初始化"),
        (name = "Storefront", description = "门店页面所需数据"),
        (name = "Common", description = "通用接口"),
    )
)]
pub struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}

#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    web::Json(ApiDoc::openapi())
}
