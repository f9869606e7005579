//! Expansion of shortened (`t.co`) URLs using the post's URL entities.

use log::{debug, warn};
use serde_json::Value;

use super::logging::sanitize_for_logging;
use super::lookup::get_path;

/// A well-formed URL entity, with offsets counted in characters.
#[derive(Debug, PartialEq, Eq)]
struct UrlSpan<'a> {
    start: usize,
    end: usize,
    expanded_url: &'a str,
}

/// Parses one entry of `entities.urls`, rejecting anything that cannot be
/// spliced into a text of `char_count` characters.
fn url_span(entity: &Value, char_count: usize) -> Option<UrlSpan<'_>> {
    let indices = entity.get("indices").and_then(Value::as_array)?;
    let (start, end) = match indices.as_slice() {
        [start, end, ..] => (start.as_u64()?, end.as_u64()?),
        _ => return None,
    };
    let start = usize::try_from(start).ok()?;
    let end = usize::try_from(end).ok()?;
    if start > end || end > char_count {
        return None;
    }

    let expanded_url = entity.get("expanded_url").and_then(Value::as_str)?;
    Some(UrlSpan {
        start,
        end,
        expanded_url,
    })
}

/// Converts a character offset into a byte offset within `text`.
///
/// Offsets equal to the character count map to `text.len()`.
fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Replaces the characters covered by `span` with its expanded URL.
fn splice(text: &str, span: &UrlSpan<'_>) -> String {
    let start = byte_offset(text, span.start);
    let end = byte_offset(text, span.end);

    let mut spliced = String::with_capacity(text.len() - (end - start) + span.expanded_url.len());
    spliced.push_str(&text[..start]);
    spliced.push_str(span.expanded_url);
    spliced.push_str(&text[end..]);
    spliced
}

/// Rewrites every shortened URL in `text` to its expanded form.
///
/// Each entry of `entities.urls` carries `indices`, a half-open `[start, end)`
/// character range into the post's text, and the `expanded_url` that range
/// stands for. Ranges are spliced from the highest `start` down to the lowest:
/// the stored offsets are a snapshot of the original text, so editing a later
/// span first leaves every earlier span's offsets valid.
///
/// Entries without usable `indices` or without an `expanded_url` are skipped
/// and their text is left as-is.
///
/// # Parameters
///
/// - `post`: The post record supplying the URL entities
/// - `text`: The text to rewrite, normally [`full_text`](super::full_text) of the same post
///
/// # Returns
///
/// A new string with the URLs expanded, or a copy of `text` if the post has no URL entities.
pub fn expand_urls_in_text(post: &Value, text: &str) -> String {
    let Some(entities) = get_path(post, &["entities", "urls"]).and_then(Value::as_array) else {
        return text.to_string();
    };

    let char_count = text.chars().count();
    let mut spans: Vec<UrlSpan<'_>> = Vec::with_capacity(entities.len());
    for (i, entity) in entities.iter().enumerate() {
        match url_span(entity, char_count) {
            Some(span) => spans.push(span),
            None => warn!(
                "Skipping malformed URL entity {} in '{}'",
                i,
                sanitize_for_logging(text, 80)
            ),
        }
    }

    spans.sort_by(|a, b| b.start.cmp(&a.start));
    debug!("Expanding {} URL entities", spans.len());

    spans
        .iter()
        .fold(text.to_string(), |expanded, span| splice(&expanded, span))
}
