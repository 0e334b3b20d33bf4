//! Error handling for the flagstyle CLI.
//!
//! Errors are layered the same way the commands are:
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`, `BuildError`) carry the detail,
//!   wrapping the library crates' own error types
//! - **Context helpers** (`ResultExt`) prefix messages on the way up
//!
//! # Example
//!
//! ```rust,no_run
//! use flagstyle_cli::error::{Result, ResultExt};
//!
//! fn project_dir() -> Result<std::path::PathBuf> {
//!     std::env::current_dir().context("Failed to read the current directory")
//! }
//! ```

pub mod miette;

use std::path::PathBuf;

use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Variant generation, bundler or relocation failures
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a flagstyle.toml file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Config file type is not understood
    #[error("Unsupported config file: {}\n\nHint: Use a .toml or .json file, or a 'flagstyle' field in package.json", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Merged configuration does not fit the expected shape
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value or extraction message
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// Project configuration or declaration file rejected
    #[error(transparent)]
    Project(#[from] flagstyle_config::ConfigError),
}

/// Build process errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// `run` was given no bundler command
    #[error("No bundler command given\n\nHint: Pass the command after '--', e.g. flagstyle run -- vite build")]
    MissingCommand,

    /// Pipeline or external bundler failure
    #[error(transparent)]
    Pipeline(#[from] flagstyle_bundler::Error),

    /// Variant generation failure
    #[error(transparent)]
    Variants(#[from] flagstyle_plugin_flags::VariantError),

    /// Asset relocation failure
    #[error(transparent)]
    Relocate(#[from] flagstyle_plugin_assets::RelocateError),
}

impl From<flagstyle_config::ConfigError> for CliError {
    fn from(err: flagstyle_config::ConfigError) -> Self {
        CliError::Config(ConfigError::Project(err))
    }
}

impl From<flagstyle_bundler::Error> for CliError {
    fn from(err: flagstyle_bundler::Error) -> Self {
        CliError::Build(BuildError::Pipeline(err))
    }
}

impl From<flagstyle_plugin_flags::VariantError> for CliError {
    fn from(err: flagstyle_plugin_flags::VariantError) -> Self {
        CliError::Build(BuildError::Variants(err))
    }
}

impl From<flagstyle_plugin_assets::RelocateError> for CliError {
    fn from(err: flagstyle_plugin_assets::RelocateError) -> Self {
        CliError::Build(BuildError::Relocate(err))
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
