//! Error types for namnsdag operations.
//!
//! This module defines [`NamnsdagError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal conditions (conflicting flags, no usable data, unreadable cache)
//!   are returned as `Err`
//! - Recoverable conditions (network failure with cached data, failure to
//!   persist) travel next to the data, see [`crate::refresh::Resolved`]
//! - Use `anyhow::Error` (via `NamnsdagError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for namnsdag operations.
#[derive(Debug, Error)]
pub enum NamnsdagError {
    /// Both data sources were disabled.
    #[error("cannot use --no-cache and --no-fetch at the same time")]
    ConflictingFlags,

    /// Cache is absent or outdated and fetching was not allowed.
    #[error("none or outdated cache, and skipping fetch because --no-fetch was supplied")]
    NoUsableData,

    /// The cache file exists but could not be read.
    #[error("Failed to read cache at {path}: {source}")]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cache file could not be written.
    #[error("Failed to write cache at {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cache could not be serialized.
    #[error("Failed to encode cache: {0}")]
    CacheEncode(#[from] serde_json::Error),

    /// Neither a user cache directory nor a home directory could be found.
    #[error("Could not determine a cache directory")]
    NoCacheDir,

    /// Retrieving names from the website failed.
    #[error("Failed to fetch names from {url}: {message}")]
    Fetch { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for namnsdag operations.
pub type Result<T> = std::result::Result<T, NamnsdagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_flags_names_both_flags() {
        let msg = NamnsdagError::ConflictingFlags.to_string();
        assert!(msg.contains("--no-cache"));
        assert!(msg.contains("--no-fetch"));
    }

    #[test]
    fn no_usable_data_mentions_no_fetch() {
        let msg = NamnsdagError::NoUsableData.to_string();
        assert!(msg.contains("--no-fetch"));
    }

    #[test]
    fn cache_read_displays_path() {
        let err = NamnsdagError::CacheRead {
            path: PathBuf::from("/cache/cache@v3.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/cache/cache@v3.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn fetch_error_displays_url_and_message() {
        let err = NamnsdagError::Fetch {
            url: "https://example.com".into(),
            message: "HTTP 500".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com"));
        assert!(msg.contains("HTTP 500"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: NamnsdagError = io_err.into();
        assert!(matches!(err, NamnsdagError::Io(_)));
    }
}
