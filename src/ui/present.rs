//! Selecting and rendering the names of a day.

use chrono::NaiveDate;

use super::theme::NamnsdagTheme;
use crate::cache::NamesPerDay;
use crate::names::{DayKey, Name};

/// Marker appended to unofficial names.
pub const UNOFFICIAL_MARKER: &str = "*";

/// Names celebrated on `day`, in stored order. Empty if none.
pub fn select_for_day(names_per_day: &NamesPerDay, day: DayKey) -> &[Name] {
    names_per_day
        .get(&day)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Drop every unofficial name.
pub fn only_official(names: &[Name]) -> Vec<&Name> {
    names.iter().filter(|n| !n.is_unofficial()).collect()
}

/// Join names with `, `, marking unofficial ones.
pub fn join_names(names: &[&Name]) -> String {
    names
        .iter()
        .map(|n| {
            if n.is_unofficial() {
                format!("{}{}", n.name, UNOFFICIAL_MARKER)
            } else {
                n.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the names line of a day.
#[derive(Debug, Clone)]
pub struct Presenter {
    theme: NamnsdagTheme,
    only_official: bool,
}

impl Presenter {
    /// Create a presenter. With `only_official`, unofficial names are hidden.
    pub fn new(theme: NamnsdagTheme, only_official: bool) -> Self {
        Self {
            theme,
            only_official,
        }
    }

    /// Names to show for `date`, after filtering.
    pub fn names_for<'a>(&self, names_per_day: &'a NamesPerDay, date: NaiveDate) -> Vec<&'a Name> {
        let names = select_for_day(names_per_day, DayKey::from_date(&date));
        if self.only_official {
            only_official(names)
        } else {
            names.iter().collect()
        }
    }

    /// Plain text of the line, e.g. `Today's names: Erik, Nyå*`.
    pub fn text(&self, names_per_day: &NamesPerDay, date: NaiveDate, today: NaiveDate) -> String {
        let label = if date == today {
            "Today's names".to_string()
        } else {
            format!("Names on {}", date.format("%Y-%m-%d"))
        };

        let names = self.names_for(names_per_day, date);
        if names.is_empty() {
            format!("{}: (none)", label)
        } else {
            format!("{}: {}", label, join_names(&names))
        }
    }

    /// Styled line ready for printing.
    pub fn render(&self, names_per_day: &NamesPerDay, date: NaiveDate, today: NaiveDate) -> String {
        self.theme
            .format_line(&self.text(names_per_day, date, today))
    }
}
