use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Base directory for uploaded images, also served at `/uploads`.
    pub upload_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WechatConfig {
    pub app_id: String,
    pub app_secret: String,
    /// The `jscode2session` endpoint. Overridable for tests.
    pub api_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub wechat: WechatConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.cors.allow_origins", vec!["*".to_string()])?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", "sqlite://football_events.db?mode=rwc")?
            .set_default("storage.upload_dir", "uploads")?
            .set_default("wechat.app_id", "")?
            .set_default("wechat.app_secret", "")?
            .set_default(
                "wechat.api_url",
                "https://api.weixin.qq.com/sns/jscode2session",
            )?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., FOOTBALL__WECHAT__APP_SECRET)
            .add_source(Environment::with_prefix("FOOTBALL").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
