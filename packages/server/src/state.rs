use std::sync::Arc;

use common::storage::ImageStore;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::services::wechat::WechatClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub store: Arc<dyn ImageStore>,
    pub wechat: Arc<WechatClient>,
    pub config: Arc<AppConfig>,
}
