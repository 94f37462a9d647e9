use sea_orm::*;
use tracing::info;

use crate::entity::customer_service;

/// Default QR code path used until an operator replaces it.
const DEFAULT_QR_CODE_URL: &str = "/uploads/customer-service/qr.jpg";

/// Default service hours.
const DEFAULT_ONLINE_TIME: &str = "10:00-23:00";

/// Seed the customer-service config with a default row when the table is
/// empty, so `GET /api/config/customer-service` works on a fresh install.
pub async fn seed_customer_service(db: &DatabaseConnection) -> Result<(), DbErr> {
    let existing = customer_service::Entity::find().one(db).await?;
    if existing.is_some() {
        return Ok(());
    }

    let model = customer_service::ActiveModel {
        qr_code_url: Set(DEFAULT_QR_CODE_URL.to_string()),
        online_time: Set(DEFAULT_ONLINE_TIME.to_string()),
        updated_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    model.insert(db).await?;
    info!("Seeded default customer-service config");

    Ok(())
}
