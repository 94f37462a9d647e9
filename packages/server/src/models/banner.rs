use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::banner;

#[derive(Deserialize, IntoParams)]
pub struct BannerListQuery {
    /// Filter by active flag; defaults to true.
    pub is_active: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct BannerResponse {
    pub id: i32,
    pub image_url: String,
    pub title: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: i32,
}

impl From<banner::Model> for BannerResponse {
    fn from(m: banner::Model) -> Self {
        Self {
            id: m.id,
            image_url: m.image_url,
            title: m.title,
            link_url: m.link_url,
            sort_order: m.sort_order,
        }
    }
}
