//! namnsdag CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use namnsdag::cli::{Cli, CommandDispatcher};
use namnsdag::ui::{should_use_colors, NamnsdagTheme, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs are written to stderr.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("namnsdag=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("namnsdag=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("namnsdag starting with args: {:?}", cli);

    let theme = NamnsdagTheme::for_colors(!cli.no_color && should_use_colors());
    let mut ui = TerminalUI::new(theme);

    let cache_dir = match cli.cache_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(cache_dir);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
