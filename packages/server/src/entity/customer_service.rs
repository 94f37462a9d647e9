use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer-service contact configuration. The table holds a single row,
/// seeded at startup.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub qr_code_url: String,

    /// Human-readable service hours, e.g. "10:00-23:00".
    pub online_time: String,

    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
