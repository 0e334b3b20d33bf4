//! Error types for feature-flag variant generation

use std::path::PathBuf;

use flagstyle_config::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while generating or cleaning variants
#[derive(Error, Debug, Diagnostic)]
pub enum VariantError {
    /// Declaration file missing, malformed or declaring an unusable flag
    #[error(transparent)]
    #[diagnostic(
        code(flagstyle::flags::declarations),
        help("The declaration file must look like {{\"featureFlags\": {{...}}, \"styles\": [...]}}")
    )]
    Declarations(#[from] ConfigError),

    /// A declared style does not live under the source root
    #[error("Style '{style}' is not under the source root '{source_root}'")]
    #[diagnostic(
        code(flagstyle::flags::style_outside_source_root),
        help("List styles with their source root prefix, e.g. \"{source_root}/button.less\"")
    )]
    StyleOutsideSourceRoot { style: String, source_root: String },

    /// A declared style is not a source stylesheet
    #[error("Style '{style}' does not have the source extension '.{source_ext}'")]
    #[diagnostic(
        code(flagstyle::flags::style_extension),
        help("Only '.{source_ext}' files can be declared as styles")
    )]
    StyleExtension { style: String, source_ext: String },

    /// A variant path would leave the flag directory
    #[error("Variant for '{style}' would be written outside the flag directory")]
    #[diagnostic(code(flagstyle::flags::invalid_variant_path))]
    InvalidVariantPath {
        style: String,
        #[source]
        source: flagstyle_bundler::Error,
    },

    /// Writing a variant file failed
    #[error("Failed to write variant {}", path.display())]
    #[diagnostic(
        code(flagstyle::flags::write_failed),
        help("Check that the flag directory is writable")
    )]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: flagstyle_bundler::Error,
    },

    /// Deleting a stale variant file or directory failed
    #[error("Failed to remove stale variant {}", path.display())]
    #[diagnostic(code(flagstyle::flags::remove_failed))]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The flag directory could not be walked
    #[error("Failed to scan flag directory {}: {message}", path.display())]
    #[diagnostic(code(flagstyle::flags::scan_failed))]
    ScanFailed { path: PathBuf, message: String },

    /// A spawned file task panicked
    #[error("Variant task failed: {0}")]
    #[diagnostic(code(flagstyle::flags::task_failed))]
    Task(#[from] tokio::task::JoinError),
}

impl VariantError {
    pub fn style_outside_source_root(style: impl Into<String>, source_root: impl Into<String>) -> Self {
        Self::StyleOutsideSourceRoot {
            style: style.into(),
            source_root: source_root.into(),
        }
    }

    pub fn style_extension(style: impl Into<String>, source_ext: impl Into<String>) -> Self {
        Self::StyleExtension {
            style: style.into(),
            source_ext: source_ext.into(),
        }
    }

    pub fn scan_failed(path: impl Into<PathBuf>, err: walkdir::Error) -> Self {
        Self::ScanFailed {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn remove_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RemoveFailed {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for variant operations
pub type Result<T> = std::result::Result<T, VariantError>;
