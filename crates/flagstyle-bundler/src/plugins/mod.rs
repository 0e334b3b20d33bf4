//! Plugin system for flagstyle-bundler.
//!
//! This module provides the plugin infrastructure, including:
//! - The `Plugin` trait with its lifecycle hooks
//! - Plugin registry with execution phases

pub mod registry;

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::input::InputOption;

pub use registry::{PluginPhase, PluginRegistry};

/// Shared, type-erased plugin handle.
pub type SharedPlugin = Arc<dyn Plugin>;

/// Build information handed to every hook.
#[derive(Debug, Clone)]
pub struct PluginContext {
    root: PathBuf,
    out_dir: PathBuf,
}

impl PluginContext {
    /// `out_dir` is resolved against `root` when relative.
    pub fn new(root: impl Into<PathBuf>, out_dir: impl AsRef<Path>) -> Self {
        let root = root.into();
        let out_dir = root.join(out_dir);
        Self { root, out_dir }
    }

    /// Project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Bundler output directory
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

/// Lifecycle hooks a plugin can take part in.
///
/// Both hooks default to doing nothing, so a plugin only implements the
/// ones it needs.
#[async_trait]
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Returns the plugin name for debugging and logging
    fn name(&self) -> Cow<'static, str>;

    /// Return the execution phase for this plugin
    ///
    /// Defaults to `Transform`.
    fn phase(&self) -> PluginPhase {
        PluginPhase::Transform
    }

    /// Runs before the bundler's input set is finalized.
    ///
    /// May rewrite `input`; the result of the last plugin is what the
    /// bundler receives.
    async fn options(&self, _ctx: &PluginContext, _input: &mut InputOption) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs once after the bundler wrote its output and manifest.
    async fn close_bundle(&self, _ctx: &PluginContext) -> anyhow::Result<()> {
        Ok(())
    }
}
