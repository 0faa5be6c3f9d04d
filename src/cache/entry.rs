//! The cached name data and its freshness metadata.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::names::{DayKey, Name};

/// Names bucketed by the day they are celebrated on.
pub type NamesPerDay = BTreeMap<DayKey, Vec<Name>>;

/// Cached names plus what is needed to revalidate them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameCache {
    /// ETag from the last successful fetch. Empty if never fetched.
    #[serde(default)]
    pub etag: String,
    /// When the names were last refreshed. `None` if never.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Names per day of the year.
    #[serde(default)]
    pub names_per_day: NamesPerDay,
}

impl NameCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all names with `names`, keeping their order within each day.
    pub fn set_names(&mut self, names: Vec<Name>) {
        self.names_per_day.clear();
        self.add_names(names);
    }

    /// Add names to the buckets of their respective days.
    ///
    /// Names dated outside the calendar are dropped.
    pub fn add_names(&mut self, names: Vec<Name>) {
        for name in names {
            let key = name.day_key();
            if !key.is_in_range() {
                warn!(
                    "Dropping {:?} with invalid date month={} day={}",
                    name.name, name.month, name.day
                );
                continue;
            }
            self.names_per_day.entry(key).or_default().push(name);
        }
    }

    /// Whether any day has names.
    pub fn is_valid(&self) -> bool {
        !self.names_per_day.is_empty()
    }

    /// Whether the cache was last refreshed before the start of `now`'s day.
    ///
    /// The day boundary is taken in `now`'s time zone. An empty cache is
    /// always outdated.
    pub fn is_outdated<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        if !self.is_valid() {
            return true;
        }
        match self.updated_at {
            None => true,
            Some(updated_at) => {
                updated_at.with_timezone(&now.timezone()).date_naive() < now.date_naive()
            }
        }
    }

    /// Whether every name sits under the key of its own day.
    pub fn is_consistent(&self) -> bool {
        self.names_per_day
            .iter()
            .all(|(key, names)| names.iter().all(|n| n.day_key() == *key))
    }

    /// Total number of names across all days.
    pub fn name_count(&self) -> usize {
        self.names_per_day.values().map(Vec::len).sum()
    }
}
