use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// Uniform response envelope: `code` 200 on success, the HTTP status of the
/// failure otherwise.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ApiResponse<T> {
    /// Status code; 200 denotes success.
    #[schema(example = 200)]
    pub code: u16,
    /// Human-readable description of the outcome.
    pub message: String,
    /// Payload; null on errors.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Envelope shape returned on failure (`data` is always null).
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorEnvelope {
    /// HTTP status of the failure.
    #[schema(example = 400)]
    pub code: u16,
    /// Human-readable error description.
    #[schema(example = "Title must be 1-200 characters")]
    pub message: String,
}

/// One page of a listing plus the data needed to fetch the rest.
#[derive(Serialize, utoipa::ToSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total matching items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    pub page_size: u64,
    /// Whether pages beyond this one contain additional matching items.
    pub has_more: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, page_size: u64) -> Self {
        Self {
            items,
            total,
            page,
            page_size,
            has_more: has_more(page, page_size, total),
        }
    }
}

/// `has_more` is true exactly when `page * page_size < total`.
pub fn has_more(page: u64, page_size: u64, total: u64) -> bool {
    page.saturating_mul(page_size) < total
}

/// Escape LIKE wildcard characters in a search string.
pub fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Serde helper for PATCH semantics on nullable fields.
///
/// * JSON field absent  => `None`          (don't update)
/// * JSON field = null  => `Some(None)`    (set to NULL)
/// * JSON field = value => `Some(Some(v))` (set to value)
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

/// Validate a trimmed title (1-200 Unicode characters).
pub fn validate_title(title: &str) -> Result<(), AppError> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > 200 {
        return Err(AppError::Validation(
            "Title must be 1-200 characters".into(),
        ));
    }
    Ok(())
}
