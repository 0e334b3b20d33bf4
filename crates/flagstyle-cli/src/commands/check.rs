//! Check command implementation.
//!
//! Validates configuration and declarations without building.

use flagstyle_config::{FlagDeclarations, validate_fs, validate_schema};
use flagstyle_plugin_flags::plan_variants;

use crate::cli::{CheckArgs, ProjectArgs};
use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Validate the merged configuration
/// 2. Check the source root and declaration file exist (unless `--schema-only`)
/// 3. Load the declarations and plan every variant
/// 4. Warn about declared styles missing on disk
pub async fn execute(args: CheckArgs, project_args: &ProjectArgs) -> Result<()> {
    ui::info("Checking configuration...");
    let project = Project::load(project_args)?;

    if args.schema_only {
        validate_schema(&project.config)?;
        ui::success("Configuration is valid!");
        return Ok(());
    }

    validate_fs(&project.config, &project.root)?;
    ui::success("Configuration is valid!");

    ui::info("Checking feature flag declarations...");
    let options = project.variant_options();
    let declarations = FlagDeclarations::load(options.flags_file_path())?;
    let variants = plan_variants(&options, &declarations)?;

    for style in &declarations.styles {
        if !project.root.join(style).is_file() {
            ui::warning(&format!("Declared style not found: {style}"));
        }
    }
    if declarations.styles.is_empty() {
        ui::warning("No styles declared, nothing to generate");
    }

    let inputs = project.discover_inputs()?;
    ui::success(&format!(
        "{} flags, {} styles, {} variants, {} direct inputs",
        declarations.feature_flags.len(),
        declarations.styles.len(),
        variants.len(),
        inputs.len()
    ));
    Ok(())
}
