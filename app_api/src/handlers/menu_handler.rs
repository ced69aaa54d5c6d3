use crate::result::{ErrorResponse, MessageResponse, result_msg};
use actix_web::{HttpResponse, Responder, delete, get, put, routes, web};
use biz_service::biz_service::menu_item_service::MenuItemService;
use biz_service::dto::menu_item_dto::{CreateMenuItemDto, UpdateMenuItemDto};
use biz_service::entitys::menu_item_entity::MenuItemView;
use common::errors::AppError;
use serde::Deserialize;
use utoipa::IntoParams;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(menu_list);
    cfg.service(menu_create);
    cfg.service(menu_get);
    cfg.service(menu_update);
    cfg.service(menu_delete);
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenuQueryDto {
    /// 按分类等值过滤（区分大小写）
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/menu",
    tag = "Menu",
    params(MenuQueryDto),
    responses(
        (status = 200, description = "菜品列表", body = [MenuItemView]),
        (status = 500, description = "服务内部错误", body = ErrorResponse)
    )
)]
#[routes]
#[get("/")]
#[get("/menu")]
pub async fn menu_list(query: web::Query<MenuQueryDto>, menu_service: web::Data<MenuItemService>) -> Result<impl Responder, AppError> {
    let items = menu_service.list_all(query.category.as_deref()).await?;
    let views: Vec<MenuItemView> = items.into_iter().map(MenuItemView::from).collect();
    Ok(web::Json(views))
}

#[utoipa::path(
    post,
    path = "/menu",
    tag = "Menu",
    request_body = CreateMenuItemDto,
    responses(
        (status = 201, description = "创建成功", body = MenuItemView),
        (status = 400, description = "缺少必填字段", body = ErrorResponse),
        (status = 500, description = "服务内部错误", body = ErrorResponse)
    )
)]
#[routes]
#[post("/")]
#[post("/menu")]
pub async fn menu_create(dto: web::Json<CreateMenuItemDto>, menu_service: web::Data<MenuItemService>) -> Result<impl Responder, AppError> {
    let created = menu_service.create(dto.into_inner()).await?;
    Ok(HttpResponse::Created().json(MenuItemView::from(created)))
}

#[utoipa::path(
    get,
    path = "/menu/{id}",
    tag = "Menu",
    params(("id" = String, Path, description = "菜品 ID")),
    responses(
        (status = 200, description = "菜品详情", body = MenuItemView),
        (status = 404, description = "菜品不存在", body = ErrorResponse)
    )
)]
#[get("/menu/{id}")]
pub async fn menu_get(id: web::Path<String>, menu_service: web::Data<MenuItemService>) -> Result<impl Responder, AppError> {
    let item = menu_service.get_by_id(&id).await?;
    Ok(web::Json(MenuItemView::from(item)))
}

#[utoipa::path(
    put,
    path = "/menu/{id}",
    tag = "Menu",
    params(("id" = String, Path, description = "菜品 ID")),
    request_body = UpdateMenuItemDto,
    responses(
        (status = 200, description = "更新后的菜品", body = MenuItemView),
        (status = 400, description = "字段不合法", body = ErrorResponse),
        (status = 404, description = "菜品不存在", body = ErrorResponse)
    )
)]
#[put("/menu/{id}")]
pub async fn menu_update(
    id: web::Path<String>,
    dto: web::Json<UpdateMenuItemDto>,
    menu_service: web::Data<MenuItemService>,
) -> Result<impl Responder, AppError> {
    let item = menu_service.update(&id, dto.into_inner()).await?;
    Ok(web::Json(MenuItemView::from(item)))
}

#[utoipa::path(
    delete,
    path = "/menu/{id}",
    tag = "Menu",
    params(("id" = String, Path, description = "菜品 ID")),
    responses(
        (status = 200, description = "删除成功", body = MessageResponse),
        (status = 404, description = "菜品不存在", body = ErrorResponse)
    )
)]
#[delete("/menu/{id}")]
pub async fn menu_delete(id: web::Path<String>, menu_service: web::Data<MenuItemService>) -> Result<impl Responder, AppError> {
    menu_service.delete(&id).await?;
    Ok(web::Json(result_msg("Item deleted successfully")))
}
