//! Command implementations for the flagstyle CLI.
//!
//! - [`prepare`] - Generate variants and print the expanded inputs
//! - [`relocate`] - Copy compiled stylesheets into the static tree
//! - [`run`] - Prepare, run the bundler, relocate
//! - [`clean`] - Delete generated variants
//! - [`check`] - Configuration validation
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and the shared project arguments.

pub mod check;
pub mod clean;
pub mod prepare;
pub mod relocate;
pub mod run;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use clean::execute as clean_execute;
pub use prepare::execute as prepare_execute;
pub use relocate::execute as relocate_execute;
pub use run::execute as run_execute;
