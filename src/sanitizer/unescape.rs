//! HTML character reference decoding.
//!
//! The X API escapes `&`, `<` and `>` in post bodies. Decoding is a single
//! left-to-right pass, so `&amp;quot;` becomes `&quot;` and is not decoded a
//! second time.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static CHARACTER_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#0*[0-9]{1,7}|#[xX]0*[0-9a-fA-F]{1,6}|[A-Za-z]+);")
        .expect("CHARACTER_REFERENCE regex should compile")
});

/// Resolves the body of a character reference (the part between `&` and `;`).
fn decode_reference(reference: &str) -> Option<char> {
    if let Some(hex) = reference
        .strip_prefix("#x")
        .or_else(|| reference.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(decimal) = reference.strip_prefix('#') {
        return decimal.parse::<u32>().ok().and_then(char::from_u32);
    }

    match reference {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

/// Decodes HTML character references in `text`.
///
/// Recognizes `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;` and
/// numeric references (`&#39;`, `&#x27;`, zero-padded forms included).
/// Unknown names and references to invalid code points are kept verbatim.
///
/// # Example
///
/// ```rust
/// use x_post_sanitizer::unescape_html;
///
/// assert_eq!(unescape_html("a &gt; b &amp; c"), "a > b & c");
/// ```
pub fn unescape_html(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    CHARACTER_REFERENCE
        .replace_all(text, |caps: &Captures<'_>| match decode_reference(&caps[1]) {
            Some(decoded) => decoded.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_references() {
        assert_eq!(
            unescape_html("&lt;&gt;&amp;&quot;&apos;"),
            "<>&\"'"
        );
        assert_eq!(unescape_html("a&nbsp;b"), "a\u{a0}b");
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(unescape_html("&#39;&#x27;&#X41;&#12354;"), "''Aあ");
    }

    #[test]
    fn test_zero_padded_numeric_references() {
        assert_eq!(unescape_html("&#00000065;"), "A");
        assert_eq!(unescape_html("&#x0000041;&#0039;"), "A'");
    }

    #[test]
    fn test_single_pass() {
        assert_eq!(unescape_html("&amp;quot;"), "&quot;");
        assert_eq!(unescape_html("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_unknown_and_invalid_references_are_kept() {
        assert_eq!(unescape_html("&nosuch; &#xD800; & ;"), "&nosuch; &#xD800; & ;");
        assert_eq!(unescape_html("AT&T"), "AT&T");
    }
}
