//! Formatting utilities for sizes, durations, and relocation summaries.

use std::path::Path;
use std::time::Duration;

use console::Term;
use flagstyle_plugin_assets::CopiedAsset;
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// ```
/// use flagstyle_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format (e.g. "50ms", "1.50s", "2m 30s").
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// `path` relative to `root` when possible, for display.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Print the copied stylesheets and their sizes to stderr.
pub fn print_copy_summary(copied: &[CopiedAsset], root: &Path, elapsed: Duration) {
    if copied.is_empty() {
        return;
    }

    let color = colors_enabled();
    let rule = "─".repeat((Term::stderr().size().1 as usize).min(80));
    let total: u64 = copied.iter().map(|asset| asset.bytes).sum();

    if color {
        eprintln!("\n{}", "Relocated stylesheets".bold().underline());
    } else {
        eprintln!("\nRelocated stylesheets");
    }
    eprintln!("{rule}");

    for asset in copied {
        let target = display_path(&asset.target, root);
        let size = format_size(asset.bytes);
        if color {
            eprintln!("  {} {} {}", "▸".blue(), target.bright_white().bold(), size.dimmed());
        } else {
            eprintln!("  ▸ {target} {size}");
        }
    }

    eprintln!("{rule}");
    let (total, elapsed) = (format_size(total), format_duration(elapsed));
    if color {
        eprintln!("  {} {} in {}", "Total:".bold(), total.green(), elapsed.green());
    } else {
        eprintln!("  Total: {total} in {elapsed}");
    }
}
