//! flagstyle CLI entry point.
//!
//! Parses arguments, initializes logging and dispatches to the commands.

use clap::Parser;
use flagstyle_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let project = args.project;
    let result = match args.command {
        cli::Command::Prepare(a) => commands::prepare_execute(a, &project).await,
        cli::Command::Relocate(a) => commands::relocate_execute(a, &project).await,
        cli::Command::Run(a) => commands::run_execute(a, &project).await,
        cli::Command::Clean(a) => commands::clean_execute(a, &project).await,
        cli::Command::Check(a) => commands::check_execute(a, &project).await,
    };

    result.map_err(error::cli_error_to_miette)
}
