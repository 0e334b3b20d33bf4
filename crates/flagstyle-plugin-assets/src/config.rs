//! Relocation options

use std::path::{Path, PathBuf};

use flagstyle_config::ProjectConfig;
use serde::{Deserialize, Serialize};

/// Which manifest entries to copy and where they land
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocateOptions {
    /// Project root
    pub root: PathBuf,

    /// Source root that manifest keys must start with (e.g. "less")
    pub source_root: String,

    /// Extension manifest keys must end with, without the dot
    pub source_ext: String,

    /// Extension of copied files, without the dot
    pub target_ext: String,

    /// Bundler output directory, relative to `root` or absolute
    pub out_dir: PathBuf,

    /// Manifest file name inside `out_dir`
    pub manifest_file: String,

    /// Static stylesheet tree, relative to `root` or absolute
    pub static_css_dir: PathBuf,
}

impl Default for RelocateOptions {
    fn default() -> Self {
        Self::from_project(".", &ProjectConfig::default())
    }
}

impl RelocateOptions {
    pub fn from_project(root: impl Into<PathBuf>, config: &ProjectConfig) -> Self {
        Self {
            root: root.into(),
            source_root: config.source_root.clone(),
            source_ext: config.source_ext.clone(),
            target_ext: config.target_ext.clone(),
            out_dir: config.out_dir.clone(),
            manifest_file: config.manifest_file.clone(),
            static_css_dir: config.static_css_dir.clone(),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn out_dir_path(&self) -> PathBuf {
        self.root.join(&self.out_dir)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir_path().join(&self.manifest_file)
    }

    pub fn static_css_path(&self) -> PathBuf {
        self.root.join(&self.static_css_dir)
    }
}
