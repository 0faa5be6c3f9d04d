//! Deciding where today's names come from.
//!
//! [`Refresher::resolve_names`] is the only place that decides whether the
//! cache can be trusted. Each invocation loads the cache at most once,
//! fetches at most once, and saves at most once.
//!
//! | cache            | `--no-fetch` | result                                  |
//! |------------------|--------------|-----------------------------------------|
//! | has names        | yes          | cached names, however old               |
//! | empty            | yes          | [`NamnsdagError::NoUsableData`]         |
//! | updated today    | no           | cached names, no request                |
//! | older or empty   | no           | conditional request, then save on change |

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, info};

use crate::cache::{CacheStore, NameCache, NamesPerDay};
use crate::error::{NamnsdagError, Result};
use crate::fetch::{FetchOutcome, NameSource};

/// Where resolved names came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The cache was used without asking the source.
    Cache,
    /// The source confirmed the cached names are current.
    NotModified,
    /// Names were freshly fetched.
    Fetched,
    /// The fetch failed; whatever the cache held is returned.
    Stale,
}

/// Names resolved for this invocation.
#[derive(Debug)]
pub struct Resolved {
    /// All known names per day.
    pub names_per_day: NamesPerDay,
    /// Where the names came from.
    pub origin: Origin,
    /// A non-fatal failure: a failed fetch, or a failed save.
    pub warning: Option<NamnsdagError>,
}

impl Resolved {
    fn new(names_per_day: NamesPerDay, origin: Origin) -> Self {
        Self {
            names_per_day,
            origin,
            warning: None,
        }
    }

    fn with_warning(mut self, warning: NamnsdagError) -> Self {
        self.warning = Some(warning);
        self
    }
}

/// Resolves names from the cache and a [`NameSource`].
pub struct Refresher<'a, S: NameSource> {
    store: &'a CacheStore,
    source: &'a S,
    on_fetch: Option<Box<dyn Fn(&str) + 'a>>,
}

impl<'a, S: NameSource> Refresher<'a, S> {
    /// Create a refresher over a cache store and a name source.
    pub fn new(store: &'a CacheStore, source: &'a S) -> Self {
        Self {
            store,
            source,
            on_fetch: None,
        }
    }

    /// Call `f` with the source description right before a request is made.
    pub fn on_fetch(mut self, f: impl Fn(&str) + 'a) -> Self {
        self.on_fetch = Some(Box::new(f));
        self
    }

    /// Resolve the names to use at `now`.
    ///
    /// `skip_cache` ignores the cache on read (fetched names are still
    /// saved). `skip_fetch` forbids network access. Setting both is an
    /// error.
    pub fn resolve_names<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        skip_cache: bool,
        skip_fetch: bool,
    ) -> Result<Resolved> {
        if skip_cache && skip_fetch {
            return Err(NamnsdagError::ConflictingFlags);
        }

        let mut cache = if skip_cache {
            debug!("Skipping cache");
            NameCache::new()
        } else {
            self.store.load()?
        };

        let is_valid = cache.is_valid();
        if is_valid && skip_fetch {
            debug!("Using cache, fetching disabled");
            return Ok(Resolved::new(cache.names_per_day, Origin::Cache));
        }

        let is_outdated = cache.is_outdated(now);
        if is_outdated && skip_fetch {
            return Err(NamnsdagError::NoUsableData);
        }
        if !is_outdated {
            debug!("Cache updated at {:?} is current", cache.updated_at);
            return Ok(Resolved::new(cache.names_per_day, Origin::Cache));
        }

        // An empty cache must not send a token, or a 304 would hide that
        // there is nothing to show.
        let etag = if is_valid && !cache.etag.is_empty() {
            Some(cache.etag.clone())
        } else {
            None
        };

        info!(
            "Cache outdated (updated at {:?}), fetching with etag {:?}",
            cache.updated_at, etag
        );
        if let Some(notify) = &self.on_fetch {
            notify(&self.source.describe());
        }

        match self.source.fetch(etag.as_deref()) {
            FetchOutcome::NotModified if is_valid => {
                debug!("Names not modified since last fetch");
                Ok(Resolved::new(cache.names_per_day, Origin::NotModified))
            }
            FetchOutcome::NotModified => {
                let err = NamnsdagError::Fetch {
                    url: self.source.describe(),
                    message: "server reported not modified, but there are no cached names"
                        .to_string(),
                };
                Ok(Resolved::new(cache.names_per_day, Origin::Stale).with_warning(err))
            }
            FetchOutcome::Fetched { names, etag } => {
                cache.set_names(names);
                cache.updated_at = Some(now.with_timezone(&Utc));
                cache.etag = etag;

                match self.store.save(&mut cache) {
                    Ok(()) => Ok(Resolved::new(cache.names_per_day, Origin::Fetched)),
                    Err(err) => {
                        debug!("Failed to save cache: {}", err);
                        Ok(Resolved::new(cache.names_per_day, Origin::Fetched).with_warning(err))
                    }
                }
            }
            FetchOutcome::Failed(err) => {
                debug!("Fetch failed: {}", err);
                Ok(Resolved::new(cache.names_per_day, Origin::Stale).with_warning(err))
            }
        }
    }
}
