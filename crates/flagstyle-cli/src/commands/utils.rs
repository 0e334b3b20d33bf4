//! Shared utilities for command implementations.
//!
//! - Project root resolution
//! - Configuration loading
//! - Option and context construction for the plugins

use std::path::{Path, PathBuf};

use flagstyle_bundler::{InputDiscovery, InputOption, PluginContext};
use flagstyle_config::ProjectConfig;
use flagstyle_plugin_assets::RelocateOptions;
use flagstyle_plugin_flags::VariantOptions;
use tracing::debug;

use crate::cli::ProjectArgs;
use crate::config::load_config;
use crate::error::{CliError, Result, ResultExt};

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to read the current directory")
}

/// Resolved project root together with its merged configuration.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: ProjectConfig,
}

impl Project {
    /// Resolve the root from `--cwd` and load the layered configuration.
    pub fn load(args: &ProjectArgs) -> Result<Self> {
        let cwd = get_cwd()?;
        let root = match &args.cwd {
            Some(dir) => resolve_path(dir, &cwd),
            None => cwd,
        };

        if !root.exists() {
            return Err(CliError::FileNotFound(root));
        }
        if !root.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "Project root is not a directory: {}",
                root.display()
            )));
        }

        let config = load_config(&root, args)?;
        debug!("Project root {} with config {:?}", root.display(), config);
        Ok(Self { root, config })
    }

    pub fn variant_options(&self) -> VariantOptions {
        VariantOptions::from_project(&self.root, &self.config)
    }

    pub fn relocate_options(&self) -> RelocateOptions {
        RelocateOptions::from_project(&self.root, &self.config)
    }

    pub fn plugin_context(&self) -> PluginContext {
        PluginContext::new(&self.root, &self.config.out_dir)
    }

    /// Source stylesheets compiled directly, as a list input.
    pub fn discover_inputs(&self) -> Result<InputOption> {
        let inputs = InputDiscovery::new(&self.root, self.config.input_patterns()).discover()?;
        Ok(InputOption::Multiple(inputs))
    }
}
