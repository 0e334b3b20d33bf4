//! Error types for asset relocation

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while relocating compiled stylesheets
#[derive(Error, Debug, Diagnostic)]
pub enum RelocateError {
    /// Source root or extension produced an unusable key matcher
    #[error("Invalid manifest key matcher '{pattern}'")]
    #[diagnostic(code(flagstyle::assets::invalid_matcher))]
    InvalidMatcher {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Manifest missing or unreadable
    #[error("Failed to read build manifest {}", path.display())]
    #[diagnostic(
        code(flagstyle::assets::manifest),
        help("Run the bundler with manifest output enabled before relocating assets")
    )]
    Manifest {
        path: PathBuf,
        #[source]
        source: flagstyle_bundler::Error,
    },

    /// Manifest entry points outside its directory
    #[error("Manifest entry '{key}' resolves outside its directory")]
    #[diagnostic(code(flagstyle::assets::invalid_entry))]
    InvalidEntry {
        key: String,
        #[source]
        source: flagstyle_bundler::Error,
    },

    /// Copying an emitted file failed
    #[error("Failed to copy {} to {}", from.display(), to.display())]
    #[diagnostic(
        code(flagstyle::assets::copy_failed),
        help("Check that the bundler output exists and the static directory is writable")
    )]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: flagstyle_bundler::Error,
    },

    /// A spawned copy task panicked
    #[error("Copy task failed: {0}")]
    #[diagnostic(code(flagstyle::assets::task_failed))]
    Task(#[from] tokio::task::JoinError),
}

/// Result alias for relocation
pub type Result<T> = std::result::Result<T, RelocateError>;
