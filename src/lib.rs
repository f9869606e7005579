//! # X Post Sanitizer
//!
//! A Rust library that turns an X (formerly Twitter) post record into clean,
//! human-readable text. Post records are the JSON objects returned by the X
//! v1.1 API (`GET statuses/show/:id`), already deserialized into a
//! `serde_json::Value` by the caller.
//!
//! ## Features
//!
//! - Picks `full_text` over the legacy `text` field
//! - Expands `t.co` links to their original URLs using `entities.urls`
//! - Strips attached-media links (`extended_entities.media` / `entities.media`)
//! - Swaps a retweet wrapper for the original post it wraps
//! - Decodes HTML entities (`&gt;` -> `>`)
//!
//! Every operation borrows the post record and returns a new `String`; the
//! record itself is never modified.
//!
//! ## Configuration
//!
//! [`SanitizeOptions`] selects the pipeline stages. All are enabled by default
//! and can be toggled with the `SANITIZE_*` environment variables through
//! [`SanitizeOptions::from_env`].
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use x_post_sanitizer::{sanitize_text, SanitizeOptions};
//!
//! let post = json!({ "full_text": "a &gt; b &amp; c" });
//! assert_eq!(sanitize_text(&post, &SanitizeOptions::default()), "a > b & c");
//! ```

pub mod config;
pub mod sanitizer;

// Re-export commonly used types and functions
pub use config::SanitizeOptions;
pub use sanitizer::{
    expand_urls_in_text, full_text, remove_media_urls_in_text, sanitize_json, sanitize_text,
    unescape_html,
};
