//! Name caching.
//!
//! The names of the whole year are kept in one JSON file in the user's
//! cache directory, together with the time they were fetched and the ETag
//! needed for a conditional refresh.

pub mod entry;
pub mod store;

pub use entry::{NameCache, NamesPerDay};
pub use store::{CacheStore, ClearOutcome};

use std::path::PathBuf;

use crate::error::{NamnsdagError, Result};

/// File name of the cache inside the cache directory.
pub const CACHE_FILE_NAME: &str = "cache@v3.json";

/// Get the default cache directory.
///
/// Uses the platform cache directory (e.g. `~/.cache` or `%LOCALAPPDATA%`),
/// falling back to `~/.cache` when that is unknown.
pub fn default_cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".cache")))
        .ok_or(NamnsdagError::NoCacheDir)?;
    Ok(base.join("namnsdag"))
}
