#![cfg_attr(docsrs, feature(doc_cfg))]

//! # flagstyle-bundler
//!
//! Build lifecycle around an external bundler.
//!
//! The bundler itself (module graph, preprocessing, hashing, manifest) runs out
//! of process. This crate models what flagstyle exchanges with it and drives
//! plugins through two hooks:
//!
//! - `options`: runs before the input set is finalized and may extend it
//! - `close_bundle`: runs after the bundler wrote its output and manifest
//!
//! ## Quick Start
//!
//! ```no_run
//! use flagstyle_bundler::{BuildPipeline, InputDiscovery, PluginContext, PluginRegistry};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let context = PluginContext::new(".", "tmp/vite");
//! let pipeline = BuildPipeline::new(context, PluginRegistry::new());
//!
//! let discovered = InputDiscovery::new(".", ["less/**/*.less", "!**/_*"]).discover()?;
//! let input = pipeline.prepare_inputs(discovered.into()).await?;
//! println!("{}", serde_json::to_string(&input)?);
//!
//! // ... run the bundler ...
//!
//! pipeline.close_bundle().await?;
//! # Ok(()) }
//! ```

pub mod discovery;
pub mod external;
pub mod input;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod plugins;
pub mod tasks;

pub use discovery::InputDiscovery;
pub use external::{ExternalBundler, INPUTS_ENV};
pub use input::InputOption;
pub use manifest::{BuildManifest, ManifestEntry};
pub use pipeline::BuildPipeline;
pub use plugins::{Plugin, PluginContext, PluginPhase, PluginRegistry, SharedPlugin};
pub use tasks::join_all_fallible;

// Logging utilities (optional, enabled with "logging" feature)
#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub use logging::{LogLevel, init_logging, init_logging_from_env};

use std::path::PathBuf;

/// Error types for flagstyle-bundler operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input option is neither a path, a list of paths, nor a name to path map.
    #[error("Unsupported input option: expected a path, a list of paths or a map of names to paths, got {shape}")]
    UnsupportedInput { shape: String },

    /// Glob pattern could not be compiled.
    #[error("Invalid input pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Manifest file does not exist.
    #[error("Build manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// Manifest file exists but is not a key to entry map.
    #[error("Invalid build manifest {}: {message}", path.display())]
    InvalidManifest { path: PathBuf, message: String },

    /// Invalid output path (e.g., directory traversal attempt).
    #[error("Invalid output path: {0}")]
    InvalidOutputPath(String),

    /// A plugin hook failed.
    #[error("Plugin '{plugin}' failed in {hook} hook: {source:#}")]
    Plugin {
        plugin: String,
        hook: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// External bundler could not be started.
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// External bundler exited unsuccessfully.
    #[error("'{command}' exited with {}", code.map(|c| format!("code {c}")).unwrap_or_else(|| "a signal".to_string()))]
    ExternalCommand { command: String, code: Option<i32> },

    /// A spawned file task panicked or was cancelled.
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for flagstyle-bundler operations.
pub type Result<T> = std::result::Result<T, Error>;
