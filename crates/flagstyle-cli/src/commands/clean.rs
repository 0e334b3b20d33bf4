//! Clean command implementation.

use flagstyle_plugin_flags::clean_variants;

use crate::cli::{CleanArgs, ProjectArgs};
use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;

/// Execute the clean command.
pub async fn execute(_args: CleanArgs, project_args: &ProjectArgs) -> Result<()> {
    let project = Project::load(project_args)?;
    let options = project.variant_options();

    let removed = clean_variants(&options).await?;
    ui::success(&format!(
        "Removed {} generated variants from {}",
        removed,
        ui::display_path(&options.flag_dir_path(), &project.root)
    ));
    Ok(())
}
