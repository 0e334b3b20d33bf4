use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available flagstyle subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate variants and print the expanded bundler inputs
    ///
    /// Enumerates the source stylesheets, regenerates every feature-flag
    /// variant and prints the combined input list as JSON.
    Prepare(PrepareArgs),

    /// Copy compiled stylesheets into the static tree
    ///
    /// Reads the bundler manifest and copies every entry whose key names a
    /// source stylesheet.
    Relocate(RelocateArgs),

    /// Prepare, run the bundler, then relocate
    ///
    /// The expanded inputs reach the bundler through the FLAGSTYLE_INPUTS
    /// environment variable as JSON.
    Run(RunArgs),

    /// Delete every generated variant
    Clean(CleanArgs),

    /// Validate configuration and declarations without building
    Check(CheckArgs),
}

/// Arguments for the prepare command
#[derive(Args, Debug, Default)]
pub struct PrepareArgs {
    /// Write the input JSON to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the relocate command
#[derive(Args, Debug, Default)]
pub struct RelocateArgs {
    /// Print a table of copied files
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Bundler command line, e.g. `-- vite build`
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Arguments for the clean command
#[derive(Args, Debug, Default)]
pub struct CleanArgs {}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Only validate the configuration shape, skip file system checks
    #[arg(long)]
    pub schema_only: bool,
}
