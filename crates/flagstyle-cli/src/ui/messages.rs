//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::colors_enabled;

fn emit(symbol: &str, message: &str, styled: impl FnOnce(&str, &str) -> String) {
    if colors_enabled() {
        eprintln!("{}", styled(symbol, message));
    } else {
        eprintln!("{symbol} {message}");
    }
}

/// Print a success message to stderr.
///
/// ```no_run
/// use flagstyle_cli::ui::success;
///
/// success("Generated 12 variants");
/// ```
pub fn success(message: &str) {
    emit("✓", message, |s, m| format!("{} {}", s.green().bold(), m));
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    emit("ℹ", message, |s, m| format!("{} {}", s.blue().bold(), m));
}

/// Print a warning message to stderr.
///
/// ```no_run
/// use flagstyle_cli::ui::warning;
///
/// warning("No styles declared, nothing to generate");
/// ```
pub fn warning(message: &str) {
    emit("⚠", message, |s, m| format!("{} {}", s.yellow().bold(), m.yellow()));
}
