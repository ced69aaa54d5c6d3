use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use app_api::handlers;
use app_api::handlers::common_handler::fallback;
use biz_service::biz_service::menu_item_service::MenuItemService;
use common::config::{AppConfig, StorageBackend, SysConfig};
use common::db::Db;
use log::{LevelFilter, warn};
use std::str::FromStr;

const CONFIG_FILE: &str = "api-config.toml";

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // 读取配置文件
    AppConfig::init(CONFIG_FILE)?;
    let app_cfg = AppConfig::get();
    //初始化日志
    init_log(&app_cfg.get_sys());

    let menu_service = web::Data::new(build_menu_service(&app_cfg).await?);
    let order = web::Data::new(app_cfg.get_order());
    let server = app_cfg.get_server();
    let address_and_port = format!("{}:{}", server.host, server.port);
    warn!("Starting server on {}", address_and_port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(app_api::cors_headers())
            .app_data(menu_service.clone())
            .app_data(order.clone())
            // 配置 控制器
            .configure(handlers::configure)
            .default_service(web::to(fallback))
    })
    .bind(address_and_port)?
    .run()
    .await?;
    Ok(())
}

pub fn init_log(sys: &SysConfig) {
    let level = LevelFilter::from_str(&sys.log_level).unwrap_or(LevelFilter::Info);
    env_logger::Builder::new().filter(None, level).init();
}

async fn build_menu_service(app_cfg: &AppConfig) -> anyhow::Result<MenuItemService> {
    let database = app_cfg.get_database();
    match database.backend {
        StorageBackend::Mongo => {
            let db = Db::init(&database).await?;
            Ok(MenuItemService::with_mongo(db).await)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage, data is lost on restart");
            Ok(MenuItemService::in_memory())
        }
    }
}
