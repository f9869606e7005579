//! Removal of attached-media URLs from post text.

use log::{debug, warn};
use serde_json::Value;

use super::lookup::media_entities;

/// Strips the in-text URL of every attached photo, video or GIF.
///
/// X appends a `https://t.co/...` link for each media attachment to the end of
/// the post body. For each media entity, in list order, the first occurrence of
/// its `url` is removed and the outer whitespace of the result is trimmed, so
/// the separator left in front of a trailing media link disappears with it.
/// Removal matches the literal substring, not the entity's offsets.
///
/// A media entity without a `url` still has the trim applied.
///
/// # Parameters
///
/// - `post`: The post record supplying the media entities
/// - `text`: The text to clean
///
/// # Returns
///
/// The cleaned text, or an untouched copy of `text` (no trimming) when the post has no media.
pub fn remove_media_urls_in_text(post: &Value, text: &str) -> String {
    let media = media_entities(post);
    if media.is_empty() {
        return text.to_string();
    }

    debug!("Removing {} media URLs", media.len());
    media.iter().enumerate().fold(text.to_string(), |cleaned, (i, entity)| {
        match entity.get("url").and_then(Value::as_str) {
            Some(url) if !url.is_empty() => cleaned.replacen(url, "", 1).trim().to_string(),
            _ => {
                warn!("Media entity {} has no url, nothing to remove", i);
                cleaned.trim().to_string()
            }
        }
    })
}
