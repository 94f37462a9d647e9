use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use common::storage::filesystem::FilesystemImageStore;
use tracing::{Level, info};

use server::config::AppConfig;
use server::database::init_db;
use server::seed::seed_customer_service;
use server::services::wechat::WechatClient;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;

    let db = init_db(&config.database.url).await?;
    seed_customer_service(&db).await?;

    let store = FilesystemImageStore::new(PathBuf::from(&config.storage.upload_dir)).await?;
    let wechat = WechatClient::new(&config.wechat);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState {
        db,
        store: Arc::new(store),
        wechat: Arc::new(wechat),
        config: Arc::new(config),
    };

    let app = server::build_router(state);

    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
