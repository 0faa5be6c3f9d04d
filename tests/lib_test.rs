//! Integration tests for the library API.

use chrono::{DateTime, Duration, TimeZone, Utc};
use namnsdag::cache::{CacheStore, ClearOutcome, NameCache};
use namnsdag::fetch::{FetchOutcome, NameSource};
use namnsdag::names::{DayKey, Name, NameType};
use namnsdag::refresh::{Origin, Refresher};
use namnsdag::ui::{only_official, select_for_day};
use namnsdag::NamnsdagError;
use std::cell::Cell;
use tempfile::TempDir;

/// Serves a fixed list and counts requests.
struct CountingSource {
    names: Vec<Name>,
    calls: Cell<usize>,
}

impl CountingSource {
    fn new(names: Vec<Name>) -> Self {
        Self {
            names,
            calls: Cell::new(0),
        }
    }
}

impl NameSource for CountingSource {
    fn fetch(&self, _etag: Option<&str>) -> FetchOutcome {
        self.calls.set(self.calls.get() + 1);
        FetchOutcome::Fetched {
            names: self.names.clone(),
            etag: "\"v1\"".to_string(),
        }
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

fn new_year() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
}

fn year_of_names() -> Vec<Name> {
    let mut names = Vec::new();
    for month in 1..=12 {
        for day in [1, 15, 28] {
            names.push(Name::new(format!("N{}-{}", month, day), month, day));
        }
    }
    names
}

#[test]
fn every_name_is_selected_only_on_its_own_day() {
    let names = year_of_names();
    let mut cache = NameCache::new();
    cache.set_names(names.clone());

    for name in &names {
        let own = select_for_day(&cache.names_per_day, name.day_key());
        assert!(own.contains(name));

        for key in cache.names_per_day.keys().filter(|k| **k != name.day_key()) {
            assert!(!select_for_day(&cache.names_per_day, *key).contains(name));
        }
    }
}

#[test]
fn fetched_names_keep_order_and_filter() {
    let temp = TempDir::new().unwrap();
    let store = CacheStore::new(temp.path());
    let source = CountingSource::new(vec![
        Name::new("Erik", 1, 1),
        Name::new("Nyå", 1, 1).with_type(NameType::Unofficial),
    ]);

    let resolved = Refresher::new(&store, &source)
        .resolve_names(&new_year(), false, false)
        .unwrap();

    let day = select_for_day(&resolved.names_per_day, DayKey::new(1, 1));
    let all: Vec<_> = day.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(all, vec!["Erik", "Nyå"]);

    let official: Vec<_> = only_official(day).iter().map(|n| n.name.as_str()).collect();
    assert_eq!(official, vec!["Erik"]);
}

#[test]
fn repeated_resolve_fetches_once() {
    let temp = TempDir::new().unwrap();
    let store = CacheStore::new(temp.path());
    let source = CountingSource::new(year_of_names());
    let refresher = Refresher::new(&store, &source);

    let first = refresher.resolve_names(&new_year(), false, false).unwrap();
    let later = new_year() + Duration::hours(5);
    let second = refresher.resolve_names(&later, false, false).unwrap();

    assert_eq!(first.origin, Origin::Fetched);
    assert_eq!(second.origin, Origin::Cache);
    assert_eq!(source.calls.get(), 1);

    let next_day = new_year() + Duration::days(1);
    refresher.resolve_names(&next_day, false, false).unwrap();
    assert_eq!(source.calls.get(), 2);
}

#[test]
fn conflicting_flags_ignore_cache_contents() {
    let temp = TempDir::new().unwrap();
    let store = CacheStore::new(temp.path());
    std::fs::write(store.path(), "garbage").unwrap();
    let source = CountingSource::new(year_of_names());

    let err = Refresher::new(&store, &source)
        .resolve_names(&new_year(), true, true)
        .unwrap_err();

    assert!(matches!(err, NamnsdagError::ConflictingFlags));
}

#[test]
fn save_load_clear_cycle() {
    let temp = TempDir::new().unwrap();
    let store = CacheStore::new(temp.path().join("namnsdag"));
    let mut cache = NameCache::new();
    cache.set_names(year_of_names());
    cache.etag = "\"xyz\"".into();

    let before = Utc::now() - Duration::seconds(1);
    store.save(&mut cache).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.names_per_day, cache.names_per_day);
    assert_eq!(loaded.etag, "\"xyz\"");
    assert!(loaded.updated_at.unwrap() >= before);

    assert_eq!(store.clear().unwrap(), ClearOutcome::Removed);
    assert_eq!(store.clear().unwrap(), ClearOutcome::AlreadyEmpty);
    assert!(!store.load().unwrap().is_valid());
}
