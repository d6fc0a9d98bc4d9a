//! errors.rs - Custom error types for the socialsan-core library.
//!
//! Normalization itself never fails: a rejected handle or website is `None`.
//! The variants below cover the fallible edges of the crate, namely platform
//! tag parsing, registry compilation and the YouTube Data API client.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `socialsan-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SocialsanError {
    #[error("Unknown platform type '{0}'")]
    UnknownPlatform(String),

    #[error("'website' is not a social platform and has no handle configuration")]
    NotASocialPlatform,

    #[error("Failed to compile pattern '{pattern}' for platform '{platform}': {source}")]
    PatternCompilation {
        platform: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Platform '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("YouTube API request failed with status {status}: {body}")]
    YoutubeApi { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to (de)serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SocialsanError>;
