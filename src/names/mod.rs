//! Name records and the day keys they are bucketed under.

pub mod day;
pub mod record;

pub use day::DayKey;
pub use record::{sort_names, Gender, Name, NameType};
