//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to the terminal
//! - [`MockUI`] capturing output for tests
//! - [`Presenter`] and helpers for rendering the names of a day
//!
//! # Example
//!
//! ```
//! use namnsdag::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("=== Today's names: Erik");
//! assert_eq!(ui.messages(), ["=== Today's names: Erik"]);
//! ```

pub mod mock;
pub mod present;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use present::{join_names, only_official, select_for_day, Presenter, UNOFFICIAL_MARKER};
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, NamnsdagTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message on standard output.
    fn message(&mut self, msg: &str);

    /// Display a progress note, e.g. that a request is being made.
    fn status(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// The theme output is styled with.
    fn theme(&self) -> &NamnsdagTheme;
}
