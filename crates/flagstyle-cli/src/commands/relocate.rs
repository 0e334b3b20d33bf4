//! Relocate command implementation.

use std::time::Instant;

use flagstyle_plugin_assets::relocate;

use crate::cli::{ProjectArgs, RelocateArgs};
use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;

/// Execute the relocate command.
///
/// Fails when the manifest is missing; an empty manifest copies nothing.
pub async fn execute(args: RelocateArgs, project_args: &ProjectArgs) -> Result<()> {
    let start = Instant::now();
    let project = Project::load(project_args)?;
    let options = project.relocate_options();

    let copied = relocate(&options).await?;
    if copied.is_empty() {
        ui::warning("No stylesheet entries in the manifest, nothing copied");
        return Ok(());
    }

    if args.summary {
        ui::print_copy_summary(&copied, &project.root, start.elapsed());
    }
    ui::success(&format!(
        "Copied {} stylesheets into {}",
        copied.len(),
        ui::display_path(&options.static_css_path(), &project.root)
    ));
    Ok(())
}
