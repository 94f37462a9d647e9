use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A mini-program user, keyed by the openid returned from the third-party
/// login exchange.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub open_id: String,

    pub nick_name: Option<String>,
    pub avatar_url: Option<String>,

    pub created_at: DateTimeUtc,
    pub last_login_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
