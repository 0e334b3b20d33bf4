//! flagstyle CLI - feature-flag stylesheet variants around an external bundler.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - One module per subcommand
//! - [`config`] - Layered configuration loading (`figment`)
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - Status lines and summaries on stderr

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
