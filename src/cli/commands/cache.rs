//! Cache command implementation.
//!
//! Provides `namnsdag cache clear`, `namnsdag cache path` and
//! `namnsdag cache info`.

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::cache::{CacheStore, ClearOutcome};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// Remove the cached names.
    Clear,
    /// Print the path of the cache file.
    Path,
    /// Show when the cache was updated and what it holds.
    Info,
}

/// The cache command implementation.
pub struct CacheCommand {
    cache_dir: PathBuf,
    args: CacheArgs,
}

impl CacheCommand {
    /// Create a new cache command.
    pub fn new(cache_dir: &Path, args: CacheArgs) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for CacheCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = CacheStore::new(&self.cache_dir);

        match &self.args.command {
            CacheSubcommand::Clear => clear_cache(&store, ui)?,
            CacheSubcommand::Path => ui.message(&store.path().display().to_string()),
            CacheSubcommand::Info => show_info(&store, ui)?,
        }

        Ok(CommandResult::success())
    }
}

fn clear_cache(store: &CacheStore, ui: &mut dyn UserInterface) -> Result<()> {
    match store.clear()? {
        ClearOutcome::Removed => ui.success("Cache cleared"),
        ClearOutcome::AlreadyEmpty => ui.message("Cache already cleared"),
    }
    Ok(())
}

fn show_info(store: &CacheStore, ui: &mut dyn UserInterface) -> Result<()> {
    let cache = store.load()?;

    ui.message(&format!("Location: {}", store.path().display()));
    if !cache.is_valid() {
        ui.message("Cache is empty");
        return Ok(());
    }

    let updated = cache
        .updated_at
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "never".to_string());
    let etag = if cache.etag.is_empty() {
        "(none)"
    } else {
        cache.etag.as_str()
    };

    ui.message(&format!("Updated: {}", updated));
    ui.message(&format!("ETag: {}", etag));
    ui.message(&format!("Days: {}", cache.names_per_day.len()));
    ui.message(&format!("Names: {}", cache.name_count()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::NameCache;
    use crate::names::Name;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn setup_test_store() -> (TempDir, CacheStore) {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        (temp, store)
    }

    fn seed(store: &CacheStore) {
        let mut cache = NameCache::new();
        cache.set_names(vec![
            Name::new("Erik", 1, 1),
            Name::new("Nyå", 1, 1),
            Name::new("Svea", 1, 2),
        ]);
        cache.etag = "\"abc\"".into();
        store.save(&mut cache).unwrap();
    }

    #[test]
    fn clear_removes_cache() {
        let (_temp, store) = setup_test_store();
        seed(&store);
        let mut ui = MockUI::new();

        clear_cache(&store, &mut ui).unwrap();

        assert_eq!(ui.successes(), ["Cache cleared"]);
        assert!(!store.path().exists());
    }

    #[test]
    fn clear_empty_cache_reports_already_cleared() {
        let (_temp, store) = setup_test_store();
        let mut ui = MockUI::new();

        clear_cache(&store, &mut ui).unwrap();

        assert_eq!(ui.messages(), ["Cache already cleared"]);
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn info_on_empty_cache() {
        let (_temp, store) = setup_test_store();
        let mut ui = MockUI::new();

        show_info(&store, &mut ui).unwrap();

        assert!(ui.messages().iter().any(|m| m == "Cache is empty"));
    }

    #[test]
    fn info_with_entries() {
        let (_temp, store) = setup_test_store();
        seed(&store);
        let mut ui = MockUI::new();

        show_info(&store, &mut ui).unwrap();

        let messages = ui.messages();
        assert!(messages.iter().any(|m| m == "ETag: \"abc\""));
        assert!(messages.iter().any(|m| m == "Days: 2"));
        assert!(messages.iter().any(|m| m == "Names: 3"));
    }

    #[test]
    fn path_command_prints_cache_file() {
        let (temp, _store) = setup_test_store();
        let cmd = CacheCommand::new(
            temp.path(),
            CacheArgs {
                command: CacheSubcommand::Path,
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(
            ui.messages(),
            [temp.path().join("cache@v3.json").display().to_string()]
        );
    }
}
