//! Configuration module for the post sanitizer.
//!
//! This module contains the sanitization options and their environment
//! variable handling.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding [`SanitizeOptions::use_retweeted_tweet`].
pub const ENV_USE_RETWEETED_TWEET: &str = "SANITIZE_USE_RETWEETED_TWEET";
/// Environment variable overriding [`SanitizeOptions::expand_url`].
pub const ENV_EXPAND_URL: &str = "SANITIZE_EXPAND_URL";
/// Environment variable overriding [`SanitizeOptions::remove_media_url`].
pub const ENV_REMOVE_MEDIA_URL: &str = "SANITIZE_REMOVE_MEDIA_URL";
/// Environment variable overriding [`SanitizeOptions::unescape`].
pub const ENV_UNESCAPE: &str = "SANITIZE_UNESCAPE";

/// Options selecting which stages of [`sanitize_text`](crate::sanitize_text) run.
///
/// Every option defaults to `true`. Missing fields fall back to their default
/// when deserializing, so a partial table in a caller's config file is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Use the original post when the input is a retweet
    pub use_retweeted_tweet: bool,
    /// Expand `t.co` URLs to their original form
    pub expand_url: bool,
    /// Remove attached-media URLs
    pub remove_media_url: bool,
    /// Decode HTML entities (e.g. `(&gt; &lt;)` -> `(> <)`)
    pub unescape: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        SanitizeOptions {
            use_retweeted_tweet: true,
            expand_url: true,
            remove_media_url: true,
            unescape: true,
        }
    }
}

impl SanitizeOptions {
    /// Creates `SanitizeOptions` from environment variables.
    ///
    /// # Optional Environment Variables
    ///
    /// - `SANITIZE_USE_RETWEETED_TWEET`
    /// - `SANITIZE_EXPAND_URL`
    /// - `SANITIZE_REMOVE_MEDIA_URL`
    /// - `SANITIZE_UNESCAPE`
    ///
    /// Each accepts `true/false`, `1/0`, `yes/no` or `on/off` (case-insensitive).
    /// Unset variables keep the default of `true`.
    ///
    /// # Returns
    ///
    /// - `Ok(SanitizeOptions)`: If every variable that is set holds a valid flag
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: Naming the first invalid variable
    ///
    /// # Example
    ///
    /// ```rust
    /// use x_post_sanitizer::SanitizeOptions;
    ///
    /// std::env::set_var("SANITIZE_UNESCAPE", "false");
    /// let options = SanitizeOptions::from_env().unwrap();
    /// assert!(!options.unescape);
    /// # std::env::remove_var("SANITIZE_UNESCAPE");
    /// ```
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading sanitize options from environment variables");
        let defaults = Self::default();

        let options = SanitizeOptions {
            use_retweeted_tweet: load_flag(ENV_USE_RETWEETED_TWEET, defaults.use_retweeted_tweet)?,
            expand_url: load_flag(ENV_EXPAND_URL, defaults.expand_url)?,
            remove_media_url: load_flag(ENV_REMOVE_MEDIA_URL, defaults.remove_media_url)?,
            unescape: load_flag(ENV_UNESCAPE, defaults.unescape)?,
        };

        debug!("Sanitize options loaded: {:?}", options);
        Ok(options)
    }
}

/// Reads a boolean flag from the environment, falling back to `default` when unset.
fn load_flag(name: &str, default: bool) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    match env::var(name) {
        Ok(raw) => {
            let value = parse_flag(&raw).ok_or_else(|| {
                format!(
                    "{} must be one of true/false, 1/0, yes/no, on/off (got '{}')",
                    name, raw
                )
            })?;
            info!("Found {} environment variable: {}", name, value);
            Ok(value)
        }
        Err(_) => {
            debug!("No {} found in environment variables, using {}", name, default);
            Ok(default)
        }
    }
}

/// Parses a human-written boolean flag.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
