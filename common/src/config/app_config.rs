use crate::util::url_util::encode_uri_component;
use anyhow::{Context, Result, anyhow};
use config::Config;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::sync::Arc;

pub const DEFAULT_DB_NAME: &str = "new_bombay_sweets";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
    pub server: Option<ServerConfig>,
    pub sys: Option<SysConfig>,
    pub order: Option<OrderConfig>,
}

impl AppConfig {
    /// 加载配置：配置文件 -> APP_ 环境变量 -> MONGO_URL / DB_NAME
    pub fn load(file: &str) -> Result<Self> {
        let config = Config::builder()
            .set_default("database.db_name", DEFAULT_DB_NAME)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("APP").prefix_separator("_").separator("__").try_parsing(true))
            .set_override_option("database.url", std::env::var("MONGO_URL").ok())?
            .set_override_option("database.db_name", std::env::var("DB_NAME").ok())?
            .build()
            .with_context(|| format!("Failed to build configuration from {}", file))?;
        let cfg = config.try_deserialize::<AppConfig>().context("Failed to deserialize configuration")?;
        Ok(cfg)
    }

    pub fn init(file: &str) -> Result<()> {
        let instance = Self::load(file)?;
        INSTANCE.set(Arc::new(instance)).map_err(|_| anyhow!("AppConfig already initialized"))
    }

    pub fn get_database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }
    pub fn get_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
    pub fn get_sys(&self) -> SysConfig {
        self.sys.clone().unwrap_or_default()
    }
    pub fn get_order(&self) -> OrderConfig {
        self.order.clone().unwrap_or_default()
    }

    /// 获取单例
    ///
    /// # Panics
    /// 若未初始化则 panic
    pub fn get() -> Arc<Self> {
        INSTANCE.get().expect("AppConfig is not initialized").clone()
    }
}
static INSTANCE: OnceCell<Arc<AppConfig>> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Mongo,
    /// 进程内存储，重启即丢失
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub db_name: String,
    pub backend: StorageBackend,
}
impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: "mongodb://localhost:27017".to_string(), db_name: DEFAULT_DB_NAME.to_string(), backend: StorageBackend::Mongo }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}
impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 3000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SysConfig {
    //全局日志级别
    pub log_level: String,
}
impl Default for SysConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

/// WhatsApp 下单链接
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OrderConfig {
    pub whatsapp_number: String,
    pub greeting: String,
}
impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "919162739650".to_string(),
            greeting: "Hello New Bombay Sweets! I would like to place an order.".to_string(),
        }
    }
}
impl OrderConfig {
    pub fn order_link(&self) -> String {
        format!("https://wa.me/{}?text={}", self.whatsapp_number, encode_uri_component(&self.greeting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_sections_missing() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get_server().port, 3000);
        assert_eq!(cfg.get_database().db_name, DEFAULT_DB_NAME);
        assert_eq!(cfg.get_database().backend, StorageBackend::Mongo);
        assert_eq!(cfg.get_sys().log_level, "info");
    }

    #[test]
    fn load_reads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nhost = \"127.0.0.1\"\nport = 8088\n\n[database]\nbackend = \"memory\"\n").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cfg = AppConfig::load(&path).unwrap();
        let server = cfg.get_server();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 8088);
        assert_eq!(cfg.get_database().backend, StorageBackend::Memory);
        // 未配置的段落仍然使用默认值
        assert!(!cfg.get_order().whatsapp_number.is_empty());
    }

    #[test]
    fn order_link_encodes_greeting() {
        let order = OrderConfig::default();
        assert_eq!(
            order.order_link(),
            "https://wa.me/919162739650?text=Hello%20New%20Bombay%20Sweets!%20I%20would%20like%20to%20place%20an%20order."
        );
    }
}
