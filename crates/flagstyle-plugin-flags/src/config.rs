//! Variant generation options
//!
//! Resolved from the project configuration; every path is anchored at the
//! project root so the generator never depends on the process working
//! directory.

use std::path::{Path, PathBuf};

use flagstyle_config::ProjectConfig;
use serde::{Deserialize, Serialize};

/// Where variants come from and where they go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOptions {
    /// Project root
    pub root: PathBuf,

    /// Stylesheet source root, relative to `root` (e.g. "less")
    pub source_root: String,

    /// Extension of source stylesheets, without the dot
    pub source_ext: String,

    /// Variant output directory, relative to `root` (e.g. "less/features")
    pub flag_dir: String,

    /// Declaration file, relative to `root`
    pub flags_file: PathBuf,
}

impl Default for VariantOptions {
    fn default() -> Self {
        Self::from_project(".", &ProjectConfig::default())
    }
}

impl VariantOptions {
    /// Take the relevant settings from a project configuration
    pub fn from_project(root: impl Into<PathBuf>, config: &ProjectConfig) -> Self {
        Self {
            root: root.into(),
            source_root: config.source_root.clone(),
            source_ext: config.source_ext.clone(),
            flag_dir: config.flag_dir.clone(),
            flags_file: config.flags_file.clone(),
        }
    }

    /// Set the project root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the declaration file
    pub fn with_flags_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.flags_file = path.into();
        self
    }

    /// Absolute variant output directory
    pub fn flag_dir_path(&self) -> PathBuf {
        self.root.join(&self.flag_dir)
    }

    /// Absolute declaration file path
    pub fn flags_file_path(&self) -> PathBuf {
        self.root.join(&self.flags_file)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Strip the source root from a declared style path.
    pub(crate) fn relative_style_path<'a>(&self, style: &'a str) -> Option<&'a str> {
        style
            .strip_prefix(self.source_root.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|rest| !rest.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_project_layout() {
        let options = VariantOptions::default();
        assert_eq!(options.source_root, "less");
        assert_eq!(options.flag_dir, "less/features");
        assert_eq!(
            options.with_root("/srv/app").flags_file_path(),
            PathBuf::from("/srv/app/config/feature-flags.json")
        );
    }

    #[test]
    fn relative_style_path_requires_source_root() {
        let options = VariantOptions::default();
        assert_eq!(options.relative_style_path("less/a/b.less"), Some("a/b.less"));
        assert_eq!(options.relative_style_path("lesser/b.less"), None);
        assert_eq!(options.relative_style_path("less/"), None);
    }
}
