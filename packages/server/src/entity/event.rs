use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A football event article: Markdown content plus a cover image derived
/// from the first image reference inside that content.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(indexed)]
    pub date: Date,

    /// Article body in Markdown.
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,

    /// URL of the first image referenced in `content`, recomputed whenever
    /// the content changes.
    pub cover_image: Option<String>,

    #[sea_orm(default_value = 0)]
    pub view_count: i32,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
