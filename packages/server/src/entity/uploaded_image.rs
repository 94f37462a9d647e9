use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Metadata row recorded once per successful image upload. Never mutated.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "uploaded_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Generated storage filename, unique per upload.
    pub filename: String,

    /// Public URL under `/uploads/`.
    pub url: String,

    /// File size in bytes.
    pub size: i32,

    /// Image category: event, thumbnail or banner.
    pub kind: String,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
