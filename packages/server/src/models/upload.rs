use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct UploadImageResponse {
    pub id: i32,
    /// Public URL of the stored image.
    #[schema(example = "/uploads/events/20260912_140000_ab12cd34.png")]
    pub url: String,
    /// Generated storage filename.
    pub filename: String,
    /// File size in bytes.
    pub size: u64,
    /// Image category: event, thumbnail or banner.
    #[serde(rename = "type")]
    pub kind: String,
    /// Ready-to-paste Markdown image reference.
    pub markdown: String,
    /// Ready-to-paste HTML image tag.
    pub html: String,
}

impl UploadImageResponse {
    pub fn new(id: i32, url: String, filename: String, size: u64, kind: &str) -> Self {
        let markdown = format!("![image]({url})");
        let html = format!(r#"<img src="{url}" alt="image" />"#);
        Self {
            id,
            url,
            filename,
            size,
            kind: kind.to_string(),
            markdown,
            html,
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct DeleteImageQuery {
    /// URL previously returned by the upload endpoint.
    pub url: String,
}
