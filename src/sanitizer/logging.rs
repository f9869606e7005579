//! Log-safe rendering of post text.

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// Truncation counts characters rather than bytes, since post text is
/// frequently non-ASCII.
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_chars`: Maximum number of characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub(crate) fn sanitize_for_logging(text: &str, max_chars: usize) -> String {
    let sanitized: String = text
        .chars()
        .take(max_chars)
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    let total_chars = text.chars().count();
    if total_chars > max_chars {
        format!("{}... [truncated, {} total chars]", sanitized, total_chars)
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_characters_are_replaced() {
        assert_eq!(sanitize_for_logging("a\nb\tc\u{7}", 80), "a b c?");
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        assert_eq!(
            sanitize_for_logging("テストテスト", 3),
            "テスト... [truncated, 6 total chars]"
        );
    }
}
