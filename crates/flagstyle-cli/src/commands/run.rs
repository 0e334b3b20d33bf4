//! Run command implementation.
//!
//! Drives the whole build: variants, external bundler, relocation.

use std::time::Instant;

use flagstyle_bundler::{BuildPipeline, ExternalBundler, PluginRegistry};
use flagstyle_config::validate_schema;
use flagstyle_plugin_assets::CopyAssetsPlugin;
use flagstyle_plugin_flags::FeatureFlagsPlugin;

use crate::cli::{ProjectArgs, RunArgs};
use crate::commands::utils::Project;
use crate::error::{BuildError, Result};
use crate::ui;

/// Execute the run command.
///
/// A failing bundler stops the build before anything is relocated.
pub async fn execute(args: RunArgs, project_args: &ProjectArgs) -> Result<()> {
    let start = Instant::now();
    let bundler = ExternalBundler::from_argv(&args.command).ok_or(BuildError::MissingCommand)?;

    let project = Project::load(project_args)?;
    validate_schema(&project.config)?;

    let registry = PluginRegistry::new()
        .with(CopyAssetsPlugin::new(project.relocate_options()))
        .with(FeatureFlagsPlugin::new(project.variant_options()));
    let pipeline = BuildPipeline::new(project.plugin_context(), registry);

    ui::info(&format!("Running {}", bundler.display()));
    let input = pipeline.run(project.discover_inputs()?, &bundler).await?;

    ui::success(&format!(
        "Built {} inputs in {}",
        input.len(),
        ui::format_duration(start.elapsed())
    ));
    Ok(())
}
