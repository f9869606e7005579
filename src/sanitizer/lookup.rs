//! Nested field access on post records.

use serde_json::Value;

/// Walks `path` through nested JSON objects.
///
/// Returns `None` as soon as any link is missing, is not an object, or the
/// final value is `null`, so callers never have to distinguish "absent" from
/// "explicitly null".
pub(crate) fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.get(*key))
        .filter(|found| !found.is_null())
}

/// Returns the media entities attached to a post.
///
/// `extended_entities.media` is authoritative when present; `entities.media`
/// is only consulted otherwise. The two lists are never merged.
pub(crate) fn media_entities(post: &Value) -> &[Value] {
    get_path(post, &["extended_entities", "media"])
        .and_then(Value::as_array)
        .or_else(|| get_path(post, &["entities", "media"]).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_path_walks_nested_objects() {
        let post = json!({ "entities": { "urls": [] } });
        assert_eq!(get_path(&post, &["entities", "urls"]), Some(&json!([])));
        assert_eq!(get_path(&post, &["entities", "media"]), None);
        assert_eq!(get_path(&post, &["extended_entities", "media"]), None);
    }

    #[test]
    fn test_get_path_treats_null_as_absent() {
        let post = json!({ "retweeted_status": null, "entities": null });
        assert_eq!(get_path(&post, &["retweeted_status"]), None);
        assert_eq!(get_path(&post, &["entities", "urls"]), None);
    }

    #[test]
    fn test_extended_media_wins() {
        let post = json!({
            "entities": { "media": [{ "url": "https://t.co/one" }] },
            "extended_entities": {
                "media": [
                    { "url": "https://t.co/one" },
                    { "url": "https://t.co/two" }
                ]
            }
        });

        let media = media_entities(&post);
        assert_eq!(media.len(), 2);
        assert_eq!(media, post["extended_entities"]["media"].as_array().unwrap().as_slice());
    }

    #[test]
    fn test_falls_back_to_entities_media() {
        let post = json!({ "entities": { "media": [{ "url": "https://t.co/one" }] } });
        assert_eq!(media_entities(&post), &[json!({ "url": "https://t.co/one" })]);
    }

    #[test]
    fn test_no_media_is_empty() {
        assert!(media_entities(&json!({ "text": "hi" })).is_empty());
        assert!(media_entities(&json!({ "entities": { "urls": [] } })).is_empty());
    }
}
