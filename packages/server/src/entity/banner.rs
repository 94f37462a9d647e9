use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A home-page carousel banner.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub image_url: String,
    pub title: Option<String>,
    pub link_url: Option<String>,

    /// Lower values are shown first.
    #[sea_orm(default_value = 0)]
    pub sort_order: i32,

    #[sea_orm(default_value = true)]
    pub is_active: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
