//! Post Sanitizing Script
//!
//! This script reads an X post record (the JSON response of
//! `GET statuses/show/:id`) and prints its sanitized text.
//!
//! Usage:
//!
//! ```bash
//! # From a file
//! sanitize_post tweet.json
//!
//! # From stdin, keeping media URLs
//! SANITIZE_REMOVE_MEDIA_URL=false sanitize_post < tweet.json
//!
//! # With debug logging
//! RUST_LOG=debug sanitize_post tweet.json
//! ```

use std::io::{self, Read};

use x_post_sanitizer::{sanitize_json, SanitizeOptions};

const USAGE: &str = "Usage: sanitize_post [FILE]\n\nReads a post JSON document from FILE, or from stdin when FILE is absent or '-'.\nStages are toggled with SANITIZE_USE_RETWEETED_TWEET, SANITIZE_EXPAND_URL,\nSANITIZE_REMOVE_MEDIA_URL and SANITIZE_UNESCAPE (true/false).";

/// Reads the raw post JSON from `path`, or from `stdin` for `None` and `-`.
fn read_input<R: Read>(
    path: Option<&str>,
    mut stdin: R,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    match path {
        None | Some("-") => {
            let mut raw = String::new();
            stdin.read_to_string(&mut raw)?;
            Ok(raw)
        }
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e).into())
        }
    }
}

fn run<R: Read>(
    path: Option<&str>,
    stdin: R,
    options: &SanitizeOptions,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let raw = read_input(path, stdin)?;
    sanitize_json(&raw, options)
}

fn main() {
    // Initialize the logging system
    env_logger::init();

    let path = std::env::args().nth(1);
    if matches!(path.as_deref(), Some("-h") | Some("--help")) {
        println!("{}", USAGE);
        return;
    }

    let result = SanitizeOptions::from_env()
        .and_then(|options| run(path.as_deref(), io::stdin().lock(), &options));
    match result {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const POST: &str = r#"{
        "full_text": "check https://t.co/abc &amp; more",
        "entities": {
            "urls": [{ "indices": [6, 22], "expanded_url": "https://example.com/page" }]
        }
    }"#;

    #[test]
    fn test_reads_from_stdin_without_path() {
        let text = run(None, Cursor::new(POST), &SanitizeOptions::default()).unwrap();
        assert_eq!(text, "check https://example.com/page & more");
    }

    #[test]
    fn test_dash_reads_from_stdin() {
        let text = run(Some("-"), Cursor::new(POST), &SanitizeOptions::default()).unwrap();
        assert_eq!(text, "check https://example.com/page & more");
    }

    #[test]
    fn test_reads_from_file() {
        let path = std::env::temp_dir().join(format!("sanitize_post_{}.json", std::process::id()));
        std::fs::write(&path, POST).unwrap();

        let options = SanitizeOptions {
            unescape: false,
            ..SanitizeOptions::default()
        };
        let text = run(path.to_str(), Cursor::new(""), &options);

        // Clean up
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text.unwrap(), "check https://example.com/page &amp; more");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_input(Some("/nonexistent/sanitize_post.json"), Cursor::new("")).unwrap_err();
        assert!(err.to_string().contains("Failed to read /nonexistent/sanitize_post.json"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = run(None, Cursor::new("{ not json"), &SanitizeOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse post JSON"));
    }
}
