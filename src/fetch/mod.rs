//! Retrieval of names from the name day website.
//!
//! - [`NameSource`] - the seam the refresh logic fetches through
//! - [`HttpFetcher`] - the real source, a conditional GET of the names page
//! - [`extract_names`] - parsing the names out of the page

pub mod http;
pub mod page;

pub use http::{FetchResponse, HttpFetcher};
pub use page::extract_names;

use crate::error::NamnsdagError;
use crate::names::Name;

/// URL of the page listing all names of the year.
pub const DEFAULT_URL: &str = "https://dagensnamnsdag.nu/namnsdagar";

/// Result of a conditional fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The source still matches the given ETag.
    NotModified,
    /// Fresh names and the ETag identifying them (empty if none was sent).
    Fetched { names: Vec<Name>, etag: String },
    /// The fetch failed.
    Failed(NamnsdagError),
}

/// A source of name records supporting conditional requests.
pub trait NameSource {
    /// Fetch all names, unless `etag` is given and still current.
    fn fetch(&self, etag: Option<&str>) -> FetchOutcome;

    /// Human-readable description of where names come from.
    fn describe(&self) -> String;
}
