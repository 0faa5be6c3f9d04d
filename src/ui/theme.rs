//! Visual theme and styling.

use console::Style;

/// namnsdag's visual theme.
#[derive(Debug, Clone)]
pub struct NamnsdagTheme {
    /// Style for the `===` prefix of the names line (dim).
    pub prefix: Style,
    /// Style for the names line text (yellow).
    pub text: Style,
    /// Style for status lines such as "Fetching names..." (dim italic).
    pub status: Style,
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for NamnsdagTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl NamnsdagTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            prefix: Style::new().black().bright(),
            text: Style::new().yellow(),
            status: Style::new().black().bright().italic(),
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            prefix: Style::new(),
            text: Style::new(),
            status: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Create the default theme if `colors` is set, otherwise a plain one.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format the `=== text` line.
    pub fn format_line(&self, text: &str) -> String {
        format!(
            "{} {}",
            self.prefix.apply_to("==="),
            self.text.apply_to(text)
        )
    }

    /// Format a status message.
    pub fn format_status(&self, msg: &str) -> String {
        format!("{}", self.status.apply_to(msg))
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
