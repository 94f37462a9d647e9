use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::event;
use crate::error::AppError;
use crate::models::shared::{double_option, validate_title};

#[derive(Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Event title, 1-200 characters after trimming.
    #[schema(example = "City derby kickoff")]
    pub title: String,
    /// Event date.
    #[schema(example = "2026-09-12")]
    pub date: NaiveDate,
    /// Markdown body. The first image reference becomes the cover image.
    pub content: Option<String>,
}

impl CreateEventRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_title(&self.title)?;
        validate_content(self.content.as_deref())
    }
}

/// Content is optional but bounded.
fn validate_content(content: Option<&str>) -> Result<(), AppError> {
    if let Some(content) = content
        && content.chars().count() > 50_000
    {
        return Err(AppError::Validation(
            "Content must be at most 50000 characters".into(),
        ));
    }
    Ok(())
}

/// Partial update. `content` distinguishes "absent" (keep), "null" (clear)
/// and "value" (replace); the cover image follows the content.
#[derive(Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub content: Option<Option<String>>,
}

impl UpdateEventRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(content) = &self.content {
            validate_content(content.as_deref())?;
        }
        Ok(())
    }
}

#[derive(Serialize, ToSchema)]
pub struct EventResponse {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub view_count: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<event::Model> for EventResponse {
    fn from(m: event::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            date: m.date,
            content: m.content,
            cover_image: m.cover_image,
            view_count: m.view_count,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct EventListQuery {
    /// Page number, 1-based.
    pub page: Option<u64>,
    /// Items per page, 1-100.
    pub page_size: Option<u64>,
    /// Substring match against the title.
    pub keyword: Option<String>,
}

impl EventListQuery {
    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    /// Resolve defaults and reject out-of-range values. Out-of-range input is
    /// an error, never silently clamped.
    pub fn validate(&self) -> Result<(u64, u64, Option<&str>), AppError> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err(AppError::Validation("page must be at least 1".into()));
        }

        let page_size = self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE);
        if !(1..=100).contains(&page_size) {
            return Err(AppError::Validation(
                "page_size must be between 1 and 100".into(),
            ));
        }

        let keyword = match self.keyword.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(kw) if kw.chars().count() > 100 => {
                return Err(AppError::Validation(
                    "keyword must be at most 100 characters".into(),
                ));
            }
            Some(kw) => Some(kw),
        };

        Ok((page, page_size, keyword))
    }
}
