//! namnsdag - the Swedish names to celebrate today.
//!
//! Fetches the list of name days from <https://dagensnamnsdag.nu/>, keeps a
//! copy in the user cache directory and prints the names of a day.
//!
//! # Modules
//!
//! - [`cache`] - The on-disk name cache
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Conditional fetching of names from the website
//! - [`names`] - Name records and day keys
//! - [`refresh`] - Deciding between cache and network
//! - [`ui`] - Terminal output and rendering of names
//!
//! # Example
//!
//! ```
//! use namnsdag::cache::NameCache;
//! use namnsdag::names::{DayKey, Name, NameType};
//! use namnsdag::ui::{join_names, only_official, select_for_day};
//!
//! let mut cache = NameCache::new();
//! cache.set_names(vec![
//!     Name::new("Erik", 1, 1),
//!     Name::new("Nyå", 1, 1).with_type(NameType::Unofficial),
//! ]);
//!
//! let names = select_for_day(&cache.names_per_day, DayKey::new(1, 1));
//! assert_eq!(join_names(&names.iter().collect::<Vec<_>>()), "Erik, Nyå*");
//! assert_eq!(join_names(&only_official(names)), "Erik");
//! ```

pub mod cache;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod names;
pub mod refresh;
pub mod ui;

pub use error::{NamnsdagError, Result};
