//! The sanitization pipeline.
//!
//! Stages always run in this order, each one skipped when its option is off:
//! retweet substitution, full-text extraction, URL expansion, media URL
//! removal, HTML entity decoding.

use log::debug;
use serde_json::Value;

use crate::config::SanitizeOptions;

use super::full_text::full_text;
use super::logging::sanitize_for_logging;
use super::lookup::get_path;
use super::media::remove_media_urls_in_text;
use super::unescape::unescape_html;
use super::urls::expand_urls_in_text;

/// Returns the original post wrapped by a retweet, if `post` is one.
fn retweeted_status(post: &Value) -> Option<&Value> {
    get_path(post, &["retweeted_status"]).filter(|status| status.is_object())
}

/// Sanitizes the text of an X post into clean, human-readable text.
///
/// # Parameters
///
/// - `post`: A post record (response of `GET statuses/show/:id`)
/// - `options`: Which pipeline stages to apply
///
/// # Returns
///
/// The sanitized text. A post with neither `full_text` nor `text` yields an
/// empty string.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use x_post_sanitizer::{sanitize_text, SanitizeOptions};
///
/// let post = json!({
///     "full_text": "check https://t.co/abc",
///     "entities": {
///         "urls": [{ "indices": [6, 22], "expanded_url": "https://example.com/page" }]
///     }
/// });
///
/// let text = sanitize_text(&post, &SanitizeOptions::default());
/// assert_eq!(text, "check https://example.com/page");
/// ```
pub fn sanitize_text(post: &Value, options: &SanitizeOptions) -> String {
    let status = match retweeted_status(post) {
        Some(original) if options.use_retweeted_tweet => {
            debug!("Using retweeted original instead of the retweet wrapper");
            original
        }
        _ => post,
    };

    let text = match full_text(status) {
        Some(text) => text.to_string(),
        None => {
            debug!("Post has neither full_text nor text");
            String::new()
        }
    };

    let text = if options.expand_url {
        expand_urls_in_text(status, &text)
    } else {
        text
    };

    let text = if options.remove_media_url {
        remove_media_urls_in_text(status, &text)
    } else {
        text
    };

    let text = if options.unescape {
        unescape_html(&text)
    } else {
        text
    };

    debug!("Sanitized text: '{}'", sanitize_for_logging(&text, 80));
    text
}

/// Parses a raw JSON post record and sanitizes it.
///
/// # Parameters
///
/// - `raw`: A JSON document holding one post record
/// - `options`: Which pipeline stages to apply
///
/// # Returns
///
/// - `Ok(String)`: The sanitized text
/// - `Err(Box<dyn std::error::Error + Send + Sync>)`: If `raw` is not valid JSON
pub fn sanitize_json(
    raw: &str,
    options: &SanitizeOptions,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let post: Value =
        serde_json::from_str(raw).map_err(|e| format!("Failed to parse post JSON: {}", e))?;
    Ok(sanitize_text(&post, options))
}
