use crate::config::DatabaseConfig;
use anyhow::{Result, anyhow};
use log::info;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use once_cell::sync::OnceCell;

#[derive(Clone)]
pub struct Db {
    pub db: Database,
}

impl Db {
    /// 创建新实例
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 初始化 MongoDB 数据库连接（全局只允许初始化一次）
    ///
    /// 驱动在第一次操作时才真正建立连接，这里只解析 URI 并创建客户端。
    pub async fn init(config: &DatabaseConfig) -> Result<&'static Database> {
        let client_options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| anyhow!("MongoDB URI parse error: {}", e))?;

        let client = Client::with_options(client_options)
            .map_err(|e| anyhow!("MongoDB client init error: {}", e))?;

        let db = client.database(&config.db_name);
        INSTANCE.set(Self::new(db)).map_err(|_| anyhow!("MongoDB already initialized"))?;
        info!("MongoDB client ready, database: {}", config.db_name);
        Ok(Self::get())
    }

    /// 获取全局数据库实例引用
    ///
    /// # Panics
    /// 若未初始化则 panic
    pub fn get() -> &'static Database {
        &INSTANCE.get().expect("MongoDB is not initialized").db
    }
}

// 全局单例容器（私有）
static INSTANCE: OnceCell<Db> = OnceCell::new();
