//! Canonical text selection for a post record.

use serde_json::Value;

/// Returns the canonical body of a post.
///
/// Posts created in extended mode carry their untruncated body in `full_text`,
/// and entity offsets are computed against that field, so it wins over the
/// legacy `text` field whenever it holds a string.
///
/// # Parameters
///
/// - `post`: The post record
///
/// # Returns
///
/// - `Some(&str)`: `full_text` if present, otherwise `text`
/// - `None`: If neither field holds a string (callers treat this as "no text available")
pub fn full_text(post: &Value) -> Option<&str> {
    post.get("full_text")
        .and_then(Value::as_str)
        .or_else(|| post.get("text").and_then(Value::as_str))
}
