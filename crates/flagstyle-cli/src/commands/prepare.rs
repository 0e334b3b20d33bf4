//! Prepare command implementation.
//!
//! Regenerates variants and prints the expanded bundler inputs.

use std::time::Instant;

use flagstyle_bundler::output::write_file;
use flagstyle_config::validate_schema;
use flagstyle_plugin_flags::prepare_inputs;

use crate::cli::{PrepareArgs, ProjectArgs};
use crate::commands::utils::{Project, resolve_path};
use crate::error::Result;
use crate::ui;

/// Execute the prepare command.
///
/// # Steps
///
/// 1. Load configuration and enumerate the source stylesheets
/// 2. Delete stale variants and write the current ones
/// 3. Print (or write) the combined input list as JSON
pub async fn execute(args: PrepareArgs, project_args: &ProjectArgs) -> Result<()> {
    let start = Instant::now();
    let project = Project::load(project_args)?;
    validate_schema(&project.config)?;

    let discovered = project.discover_inputs()?;
    let direct = discovered.len();
    let input = prepare_inputs(&project.variant_options(), discovered).await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&input)?
    } else {
        serde_json::to_string(&input)?
    };

    match args.output {
        Some(path) => {
            let path = resolve_path(&path, &project.root);
            write_file(&path, format!("{json}\n")).await?;
            ui::success(&format!(
                "Wrote {} inputs ({} variants) to {} in {}",
                input.len(),
                input.len() - direct,
                ui::display_path(&path, &project.root),
                ui::format_duration(start.elapsed())
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
