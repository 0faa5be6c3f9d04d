//! Day-of-month keys.

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A day in a month, no matter what year.
///
/// Ordered by month, then day. Serializes as `MM-DD` so it can be used as a
/// JSON object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey {
    // Field order matters for the derived ordering.
    month: u32,
    day: u32,
}

impl DayKey {
    /// Create a key from a calendar month (1-12) and day (1-31).
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Create a key from the month and day of a date, ignoring the year
    /// and any time of day.
    pub fn from_date(date: &impl Datelike) -> Self {
        Self::new(date.month(), date.day())
    }

    /// Calendar month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month, 1-31.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whether month and day fall in 1-12 and 1-31, the range a key must
    /// have to be read back from its text form.
    pub fn is_in_range(&self) -> bool {
        (1..=12).contains(&self.month) && (1..=31).contains(&self.day)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for DayKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid day key: {}", s))?;
        let month: u32 = month
            .trim()
            .parse()
            .map_err(|_| format!("invalid month in day key: {}", s))?;
        let day: u32 = day
            .trim()
            .parse()
            .map_err(|_| format!("invalid day in day key: {}", s))?;

        if !(1..=12).contains(&month) {
            return Err(format!("month out of range in day key: {}", s));
        }
        if !(1..=31).contains(&day) {
            return Err(format!("day out of range in day key: {}", s));
        }

        Ok(Self::new(month, day))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
