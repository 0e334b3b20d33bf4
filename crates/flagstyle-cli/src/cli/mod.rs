//! Command-line interface definition for flagstyle.
//!
//! # Command Structure
//!
//! - `flagstyle prepare` - Generate variants and print the expanded inputs
//! - `flagstyle relocate` - Copy compiled stylesheets into the static tree
//! - `flagstyle run -- <cmd>` - Prepare, run the bundler, then relocate
//! - `flagstyle clean` - Delete generated variants
//! - `flagstyle check` - Validate configuration and declarations

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser};

pub use commands::{CheckArgs, CleanArgs, Command, PrepareArgs, RelocateArgs, RunArgs};

/// flagstyle - feature-flag stylesheet variants around an external bundler
#[derive(Parser, Debug)]
#[command(
    name = "flagstyle",
    version,
    about = "Feature-flag stylesheet variants around an external bundler",
    long_about = "flagstyle generates one stylesheet variant per declared feature flag before\n\
                  the bundler runs, hands them to the bundler as extra inputs, and copies the\n\
                  compiled stylesheets named in the bundler manifest into the static tree."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Options that locate the project and override its configuration.
///
/// Overrides take precedence over `FLAGSTYLE_*` environment variables, which
/// take precedence over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Config file (defaults to flagstyle.toml or the "flagstyle" field of package.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Feature flag declaration file
    #[arg(long, global = true, value_name = "FILE")]
    pub flags_file: Option<PathBuf>,

    /// Bundler output directory holding the manifest
    #[arg(long, global = true, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Static stylesheet directory
    #[arg(long, global = true, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}
