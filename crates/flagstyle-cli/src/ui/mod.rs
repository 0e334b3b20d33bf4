//! Terminal output for the flagstyle CLI.
//!
//! Status lines and summaries go to stderr; stdout is reserved for command
//! output such as the expanded input JSON.
//!
//! ```no_run
//! use flagstyle_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Generated 12 variants");
//! ui::warning("No styles declared");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{display_path, format_duration, format_size, print_copy_summary};
pub use messages::{info, success, warning};

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

static COLORS: AtomicBool = AtomicBool::new(true);

/// Decide once whether status output is colored.
///
/// `--no-color`, `NO_COLOR` and CI runs disable colors; `FORCE_COLOR` wins
/// over CI detection. Otherwise the terminal decides.
pub fn init_colors(no_color: bool) {
    let forced = std::env::var_os("FORCE_COLOR").is_some();
    let enabled = !no_color && (forced || !is_ci()) && crate::logger::should_use_colors();
    COLORS.store(enabled, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn detects_ci_variables() {
        unsafe {
            std::env::set_var("GITLAB_CI", "true");
        }
        assert!(is_ci());
        unsafe {
            std::env::remove_var("GITLAB_CI");
        }
    }
}
