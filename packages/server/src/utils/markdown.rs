use std::sync::LazyLock;

use regex::Regex;

/// Markdown image syntax: `![alt](url)`.
static MD_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("valid markdown image regex"));

/// HTML image tag: `<img ... src="url">` with either quote style.
static HTML_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).expect("valid html image regex")
});

/// Extract the URL of the first image referenced in a Markdown blob.
///
/// Markdown syntax takes priority over HTML `<img>` tags regardless of where
/// each appears in the text: the earliest Markdown match wins if one exists
/// anywhere, otherwise the earliest HTML match. That mirrors the behavior the
/// event content was authored against; callers relying on strict document
/// order should not use this function.
///
/// Pure and total: never fails, returns `None` when nothing matches.
pub fn extract_first_image(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = MD_IMAGE.captures(text) {
        return Some(caps[1].to_string());
    }

    if let Some(caps) = HTML_IMAGE.captures(text) {
        return Some(caps[1].to_string());
    }

    None
}
