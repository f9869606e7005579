//! X post (formerly Twitter tweet) text sanitization.
//!
//! This module turns a post record, as returned by the X v1.1
//! `GET statuses/show/:id` endpoint, into clean human-readable text. The
//! record is borrowed as a `serde_json::Value` and never modified; every
//! operation returns a freshly allocated `String`.

mod full_text;
mod logging;
mod lookup;
mod media;
mod pipeline;
mod unescape;
mod urls;

// Re-export public API
pub use full_text::full_text;
pub use media::remove_media_urls_in_text;
pub use pipeline::{sanitize_json, sanitize_text};
pub use unescape::unescape_html;
pub use urls::expand_urls_in_text;

