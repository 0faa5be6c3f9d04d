//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Duration;

use super::commands::cache::CacheArgs;
use crate::cache::default_cache_dir;
use crate::error::Result;
use crate::fetch::DEFAULT_URL;

/// Simple CLI for fetching the list of names to celebrate today.
#[derive(Debug, Parser)]
#[command(name = "namnsdag")]
#[command(author, version, about)]
#[command(long_about = "Simple CLI for fetching the list of names to celebrate today.

When run, it queries https://dagensnamnsdag.nu/ for the names of the year and
caches the results in the user cache directory (e.g. ~/.cache/namnsdag/).")]
pub struct Cli {
    #[command(flatten)]
    pub show: ShowArgs,

    /// URL of the page listing all names
    #[arg(long, global = true, env = "NAMNSDAG_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Directory to keep the cache in
    #[arg(long, global = true, env = "NAMNSDAG_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = 30, value_name = "SECS")]
    pub timeout: u64,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The cache directory to use, `--cache-dir` or the platform default.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        match &self.cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_cache_dir(),
        }
    }

    /// The HTTP timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the name cache
    Cache(CacheArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for showing names (the default action).
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Date to show names for, as YYYY-MM-DD (defaults to today)
    #[arg(value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Skips loading from cache.
    #[arg(long)]
    pub no_cache: bool,

    /// Skips fetching via HTTP.
    #[arg(long)]
    pub no_fetch: bool,

    /// Skips showing unofficial namnsdagar, aka "Bolibompa namnsdagar".
    #[arg(long)]
    pub no_unofficial: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
