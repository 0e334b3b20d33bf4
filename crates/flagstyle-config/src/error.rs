//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("source root not found: {}", path.display())]
    SourceRootNotFound { path: PathBuf },

    #[error("feature flag declarations not found: {}", path.display())]
    DeclarationsNotFound { path: PathBuf },

    // Config parsing errors
    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Declaration file errors
    #[error("invalid feature flag declarations in {}: {message}", path.display())]
    InvalidDeclarations { path: PathBuf, message: String },

    #[error("invalid flag name '{name}': flags must be usable as stylesheet variable names")]
    InvalidFlagName { name: String },

    #[error("flag name '{name}' is reserved for the all-flags variant")]
    ReservedFlagName { name: String },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
