//! Two-phase build pipeline.
//!
//! ```text
//! discovered inputs → options hooks (phase order) → expanded inputs
//!                                  ↓
//!                       external bundler writes output + manifest
//!                                  ↓
//!                       close_bundle hooks (phase order)
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::external::ExternalBundler;
use crate::input::InputOption;
use crate::plugins::{PluginContext, PluginRegistry, SharedPlugin};
use crate::{Error, Result};

/// Drives registered plugins through the build lifecycle.
pub struct BuildPipeline {
    context: PluginContext,
    plugins: Vec<SharedPlugin>,
}

impl BuildPipeline {
    pub fn new(context: PluginContext, registry: PluginRegistry) -> Self {
        Self {
            context,
            plugins: registry.into_plugins(),
        }
    }

    pub fn context(&self) -> &PluginContext {
        &self.context
    }

    pub fn plugins(&self) -> &[SharedPlugin] {
        &self.plugins
    }

    /// Run every `options` hook and return the expanded input set.
    pub async fn prepare_inputs(&self, mut input: InputOption) -> Result<InputOption> {
        let before = input.len();
        for plugin in &self.plugins {
            debug!("[{}] options hook", plugin.name());
            plugin
                .options(&self.context, &mut input)
                .await
                .map_err(|source| Error::Plugin {
                    plugin: plugin.name().into_owned(),
                    hook: "options",
                    source,
                })?;
        }

        info!("Prepared {} inputs ({} added by plugins)", input.len(), input.len().saturating_sub(before));
        Ok(input)
    }

    /// Run every `close_bundle` hook.
    pub async fn close_bundle(&self) -> Result<()> {
        for plugin in &self.plugins {
            debug!("[{}] close_bundle hook", plugin.name());
            plugin
                .close_bundle(&self.context)
                .await
                .map_err(|source| Error::Plugin {
                    plugin: plugin.name().into_owned(),
                    hook: "close_bundle",
                    source,
                })?;
        }
        Ok(())
    }

    /// Prepare inputs, run the external bundler on them, then close the bundle.
    ///
    /// A failing bundler stops the pipeline before any `close_bundle` hook runs.
    pub async fn run(&self, input: InputOption, bundler: &ExternalBundler) -> Result<InputOption> {
        let start = Instant::now();
        let input = self.prepare_inputs(input).await?;
        bundler.run(self.context.root(), &input).await?;
        self.close_bundle().await?;
        info!("Build pipeline finished in {:.2?}", start.elapsed());
        Ok(input)
    }
}
