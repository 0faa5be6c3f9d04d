//! Showing the names of a day, the default command.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::CacheStore;
use crate::cli::args::ShowArgs;
use crate::error::Result;
use crate::fetch::{HttpFetcher, NameSource};
use crate::refresh::{Origin, Refresher, Resolved};
use crate::ui::{Presenter, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    cache_dir: PathBuf,
    url: String,
    timeout: Duration,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(cache_dir: &Path, url: &str, timeout: Duration, args: ShowArgs) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
            url: url.to_string(),
            timeout,
            args,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = CacheStore::new(&self.cache_dir);
        let fetcher = HttpFetcher::with_timeout(&self.url, self.timeout)?;
        show_names(&store, &fetcher, &Local::now(), &self.args, ui)
    }
}

/// Resolve names at `now` and print the line for the requested day.
///
/// Stale names are printed with a warning when the refresh failed; with no
/// names at all the failure is returned instead.
pub fn show_names<S: NameSource, Tz: TimeZone>(
    store: &CacheStore,
    source: &S,
    now: &DateTime<Tz>,
    args: &ShowArgs,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let today: NaiveDate = now.date_naive();
    let date = args.date.unwrap_or(today);

    let ui = RefCell::new(ui);
    let resolved = Refresher::new(store, source)
        .on_fetch(|url| {
            ui.borrow_mut()
                .status(&format!("Fetching names from {}", url))
        })
        .resolve_names(now, args.no_cache, args.no_fetch)?;
    let ui = ui.into_inner();

    let Resolved {
        names_per_day,
        origin,
        warning,
    } = resolved;

    match warning {
        Some(err) if names_per_day.is_empty() => return Err(err),
        Some(err) if origin == Origin::Stale => {
            ui.warning(&format!("{}; showing cached names", err));
        }
        Some(err) => ui.warning(&err.to_string()),
        None => {}
    }

    let presenter = Presenter::new(ui.theme().clone(), args.no_unofficial);
    ui.message(&presenter.render(&names_per_day, date, today));

    Ok(CommandResult::success())
}
