//! Feature-flag variant plugin for flagstyle
//!
//! Before the bundler settles its input set, this plugin reads the flag
//! declaration file, regenerates one stylesheet variant per (style, flag) pair
//! plus an all-flags variant per style, and appends the generated files to the
//! bundler input.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use flagstyle_bundler::{BuildPipeline, InputOption, PluginContext, PluginRegistry};
//! use flagstyle_plugin_flags::{FeatureFlagsPlugin, VariantOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let plugin = FeatureFlagsPlugin::new(VariantOptions::default());
//! let pipeline = BuildPipeline::new(
//!     PluginContext::new(".", "tmp/vite"),
//!     PluginRegistry::new().with(plugin),
//! );
//! let input = pipeline.prepare_inputs(InputOption::Single("less/app.less".into())).await?;
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

use anyhow::{Context, Result};
use async_trait::async_trait;
use flagstyle_bundler::{InputOption, Plugin, PluginContext, PluginPhase};
use tracing::debug;

mod config;
mod error;
mod generator;

pub use config::VariantOptions;
pub use error::VariantError;
pub use generator::{
    Variant, clean_variants, generate_variants, plan_variants, prepare_inputs, variant_source,
};

/// Plugin that materializes feature-flag variants in the `options` hook
///
/// Runs in the `Generate` phase so later plugins already see the variants
/// among the inputs.
#[derive(Clone, Debug)]
pub struct FeatureFlagsPlugin {
    options: VariantOptions,
}

impl FeatureFlagsPlugin {
    pub fn new(options: VariantOptions) -> Self {
        Self { options }
    }

    pub fn variant_options(&self) -> &VariantOptions {
        &self.options
    }
}

#[async_trait]
impl Plugin for FeatureFlagsPlugin {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("feature-flags")
    }

    fn phase(&self) -> PluginPhase {
        PluginPhase::Generate
    }

    async fn options(&self, ctx: &PluginContext, input: &mut InputOption) -> Result<()> {
        // Variants live under the build root, whatever root the options carry
        let options = self.options.clone().with_root(ctx.root());
        debug!("[feature-flags] generating variants under {}", options.flag_dir_path().display());

        let current = std::mem::take(input);
        *input = prepare_inputs(&options, current)
            .await
            .with_context(|| format!("generating variants from {}", options.flags_file_path().display()))?;
        Ok(())
    }
}
