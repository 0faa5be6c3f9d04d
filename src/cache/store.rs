//! Cache storage implementation.

use chrono::Utc;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

use super::entry::NameCache;
use super::CACHE_FILE_NAME;
use crate::error::{NamnsdagError, Result};

/// Outcome of clearing the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The cache file was removed.
    Removed,
    /// There was no cache file to remove.
    AlreadyEmpty,
}

/// Storage for the cached names, a single JSON file in a directory.
pub struct CacheStore {
    /// Root directory for cache.
    root: PathBuf,
}

impl CacheStore {
    /// Create a new cache store.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the cache file.
    pub fn path(&self) -> PathBuf {
        self.root.join(CACHE_FILE_NAME)
    }

    /// Ensure the cache directory exists.
    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|source| NamnsdagError::CacheWrite {
            path: self.root.clone(),
            source,
        })
    }

    /// Load the cache.
    ///
    /// A missing file, or one that is not in the current format, yields an
    /// empty cache. Other read failures are errors.
    pub fn load(&self) -> Result<NameCache> {
        let path = self.path();

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No cache file at {}", path.display());
                return Ok(NameCache::new());
            }
            Err(source) => return Err(NamnsdagError::CacheRead { path, source }),
        };

        match serde_json::from_slice::<NameCache>(&bytes) {
            Ok(cache) if cache.is_consistent() => {
                debug!(
                    "Loaded {} names for {} days from {}",
                    cache.name_count(),
                    cache.names_per_day.len(),
                    path.display()
                );
                Ok(cache)
            }
            Ok(_) => {
                warn!(
                    "Ignoring cache at {}: names stored under the wrong day",
                    path.display()
                );
                Ok(NameCache::new())
            }
            Err(e) => {
                warn!("Ignoring unreadable cache at {}: {}", path.display(), e);
                Ok(NameCache::new())
            }
        }
    }

    /// Save the cache, stamping it with the current time if it has never
    /// been updated.
    ///
    /// The file is written to a temporary sibling and renamed into place, so
    /// readers see either the old or the new contents.
    pub fn save(&self, cache: &mut NameCache) -> Result<()> {
        self.ensure_dir()?;

        if cache.updated_at.is_none() {
            cache.updated_at = Some(Utc::now());
        }

        let mut json = serde_json::to_vec_pretty(cache)?;
        json.push(b'\n');

        let path = self.path();
        let tmp = self
            .root
            .join(format!(".{}.tmp.{}", CACHE_FILE_NAME, std::process::id()));

        let write_err = |source: std::io::Error| NamnsdagError::CacheWrite {
            path: path.clone(),
            source,
        };

        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(&json)?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e));
        }

        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e));
        }

        debug!("Saved cache to {}", path.display());
        Ok(())
    }

    /// Remove the cache file.
    pub fn clear(&self) -> Result<ClearOutcome> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed cache at {}", path.display());
                Ok(ClearOutcome::Removed)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ClearOutcome::AlreadyEmpty),
            Err(source) => Err(NamnsdagError::CacheWrite { path, source }),
        }
    }
}
