use thiserror::Error;

/// Maximum accepted upload size in bytes (5 MiB).
pub const MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;

/// Extensions accepted for image uploads, lowercase without the dot.
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Upload policy violations.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsupported file format '{0}'. Allowed: .jpg, .jpeg, .png, .gif, .webp")]
    UnsupportedFormat(String),

    #[error("File too large: {actual} bytes exceeds the {limit} byte limit")]
    TooLarge { actual: u64, limit: u64 },
}

/// Image category declared by the uploader. Determines the storage
/// sub-directory and the public URL prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Event,
    Thumbnail,
    Banner,
}

impl ImageKind {
    /// Parse the multipart `type` field. Unrecognized values fall back to
    /// `Event`, matching the lenient behavior clients depend on.
    pub fn parse(s: &str) -> Self {
        match s {
            "thumbnail" => ImageKind::Thumbnail,
            "banner" => ImageKind::Banner,
            _ => ImageKind::Event,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageKind::Event => "event",
            ImageKind::Thumbnail => "thumbnail",
            ImageKind::Banner => "banner",
        }
    }

    /// Storage sub-directory under the upload base.
    pub fn subdir(self) -> &'static str {
        match self {
            ImageKind::Event => "events",
            ImageKind::Thumbnail => "thumbnails",
            ImageKind::Banner => "banners",
        }
    }
}

/// A validated, collision-resistant storage name for an upload.
#[derive(Debug, Clone)]
pub struct StoredName {
    /// Generated filename: sortable second-resolution timestamp, an 8-hex
    /// random suffix, and the lowercased original extension.
    pub filename: String,
    pub kind: ImageKind,
}

impl StoredName {
    /// Path relative to the upload base, e.g. `events/20250101_120000_ab12cd34.png`.
    pub fn rel_path(&self) -> String {
        format!("{}/{}", self.kind.subdir(), self.filename)
    }

    /// Public URL served by the static file route.
    pub fn url(&self) -> String {
        format!("/uploads/{}", self.rel_path())
    }
}

/// Validate an upload against the extension and size policy and produce a
/// unique storage name. Pure: the caller persists bytes and metadata.
pub fn validate_and_name(
    original_filename: &str,
    content_length: u64,
    kind: ImageKind,
) -> Result<StoredName, UploadError> {
    let ext = file_extension(original_filename)
        .ok_or_else(|| UploadError::UnsupportedFormat(original_filename.to_string()))?;

    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(UploadError::UnsupportedFormat(format!(".{ext}")));
    }

    if content_length > MAX_UPLOAD_SIZE {
        return Err(UploadError::TooLarge {
            actual: content_length,
            limit: MAX_UPLOAD_SIZE,
        });
    }

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let suffix = &uuid::Uuid::new_v4().simple().to_string()[..8];
    let filename = format!("{timestamp}_{suffix}.{ext}");

    Ok(StoredName { filename, kind })
}

/// Lowercased extension after the last dot, `None` when there is no
/// extension or the stem is empty.
fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
