//! Asset relocation plugin for flagstyle
//!
//! After the bundler finished, this plugin reads its manifest and copies every
//! compiled stylesheet whose key names a source stylesheet into the static
//! tree, mirroring the source layout:
//!
//! ```text
//! manifest key "less/page/top.less" → tmp/vite/assets/top.a1b2.css → static/css/page/top.css
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use flagstyle_plugin_assets::{RelocateOptions, relocate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let copied = relocate(&RelocateOptions::default()).await?;
//! println!("copied {} stylesheets", copied.len());
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

use anyhow::Context;
use async_trait::async_trait;
use flagstyle_bundler::{Plugin, PluginContext, PluginPhase};
use tracing::info;

mod config;
mod error;
mod relocator;

pub use config::RelocateOptions;
pub use error::RelocateError;
pub use relocator::{CopiedAsset, KeyMatcher, relocate, relocate_outputs};

/// Plugin that copies compiled stylesheets in the `close_bundle` hook
#[derive(Debug, Clone)]
pub struct CopyAssetsPlugin {
    options: RelocateOptions,
}

impl CopyAssetsPlugin {
    pub fn new(options: RelocateOptions) -> Self {
        Self { options }
    }
}

impl Default for CopyAssetsPlugin {
    fn default() -> Self {
        Self::new(RelocateOptions::default())
    }
}

#[async_trait]
impl Plugin for CopyAssetsPlugin {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("copy-assets")
    }

    fn phase(&self) -> PluginPhase {
        PluginPhase::PostProcess
    }

    async fn close_bundle(&self, ctx: &PluginContext) -> anyhow::Result<()> {
        let options = self
            .options
            .clone()
            .with_root(ctx.root())
            .with_out_dir(ctx.out_dir());

        let copied = relocate(&options)
            .await
            .with_context(|| format!("relocating assets into {}", options.static_css_path().display()))?;
        info!("Relocated {} stylesheets", copied.len());
        Ok(())
    }
}
