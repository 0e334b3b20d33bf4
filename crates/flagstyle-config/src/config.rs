//! Project layout configuration for flagstyle.
//!
//! This module provides the main `ProjectConfig` struct. Every path is relative
//! to the project root. For file discovery, see the `discovery` module.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};

/// Name of the directory that receives the all-flags-enabled variants.
pub const ALL_FLAGS_DIR: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Stylesheet source root (e.g. "less")
    #[serde(default = "default_source_root")]
    pub source_root: String,

    /// Extension of source stylesheets, without the dot
    #[serde(default = "default_source_ext")]
    pub source_ext: String,

    /// Extension of emitted stylesheets, without the dot
    #[serde(default = "default_target_ext")]
    pub target_ext: String,

    /// Directory that holds the generated feature-flag variants
    #[serde(default = "default_flag_dir")]
    pub flag_dir: String,

    /// Temporary output directory of the external bundler
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Manifest file name inside `out_dir`
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Root of the static stylesheet tree
    #[serde(default = "default_static_css_dir")]
    pub static_css_dir: PathBuf,

    /// Feature flag declaration file
    #[serde(default = "default_flags_file")]
    pub flags_file: PathBuf,

    /// Glob patterns for direct build inputs; `!` negates.
    ///
    /// When unset, the patterns are derived from the source root, the source
    /// extension and the flag directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_patterns: Option<Vec<String>>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            source_ext: default_source_ext(),
            target_ext: default_target_ext(),
            flag_dir: default_flag_dir(),
            out_dir: default_out_dir(),
            manifest_file: default_manifest_file(),
            static_css_dir: default_static_css_dir(),
            flags_file: default_flags_file(),
            input_patterns: None,
        }
    }
}

impl ProjectConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use flagstyle_config::ProjectConfig;
    /// use serde_json::json;
    ///
    /// let config = ProjectConfig::from_value(json!({ "source_root": "styles" })).unwrap();
    /// assert_eq!(config.source_root, "styles");
    /// assert_eq!(config.target_ext, "css");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Glob patterns selecting the stylesheets compiled directly.
    ///
    /// Partials (`_*`) and generated variants are excluded; they are still
    /// reachable through `@import`.
    pub fn input_patterns(&self) -> Vec<String> {
        if let Some(patterns) = &self.input_patterns {
            return patterns.clone();
        }

        vec![
            format!("{}/**/*.{}", self.source_root, self.source_ext),
            format!("!{}/**/*.{}", self.flag_dir, self.source_ext),
            "!**/_*".to_string(),
        ]
    }

    /// Absolute path of the bundler manifest.
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.out_dir).join(&self.manifest_file)
    }

    /// Strip the source root from a style path.
    ///
    /// Returns `None` when the style does not live under the source root.
    ///
    /// ```
    /// use flagstyle_config::ProjectConfig;
    ///
    /// let config = ProjectConfig::default();
    /// assert_eq!(config.relative_style_path("less/page/top.less"), Some("page/top.less"));
    /// assert_eq!(config.relative_style_path("css/top.less"), None);
    /// ```
    pub fn relative_style_path<'a>(&self, style: &'a str) -> Option<&'a str> {
        style
            .strip_prefix(self.source_root.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|rest| !rest.is_empty())
    }
}

fn default_source_root() -> String {
    "less".to_string()
}

fn default_source_ext() -> String {
    "less".to_string()
}

fn default_target_ext() -> String {
    "css".to_string()
}

fn default_flag_dir() -> String {
    "less/features".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("tmp/vite")
}

fn default_manifest_file() -> String {
    "manifest.json".to_string()
}

fn default_static_css_dir() -> PathBuf {
    PathBuf::from("static/css")
}

fn default_flags_file() -> PathBuf {
    PathBuf::from("config/feature-flags.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_fills_defaults() {
        let config = ProjectConfig::from_value(json!({ "out_dir": "build/tmp" })).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("build/tmp"));
        assert_eq!(config.source_root, "less");
        assert_eq!(config.flag_dir, "less/features");
        assert_eq!(config.static_css_dir, PathBuf::from("static/css"));
    }

    #[test]
    fn from_value_rejects_wrong_types() {
        let result = ProjectConfig::from_value(json!({ "source_root": 42 }));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn to_value_serializes_config() {
        let value = ProjectConfig::default().to_value().unwrap();
        assert_eq!(value["manifest_file"], json!("manifest.json"));
        assert!(value.get("input_patterns").is_none());
    }

    #[test]
    fn default_input_patterns_exclude_variants_and_partials() {
        let patterns = ProjectConfig::default().input_patterns();
        assert_eq!(
            patterns,
            vec![
                "less/**/*.less".to_string(),
                "!less/features/**/*.less".to_string(),
                "!**/_*".to_string(),
            ]
        );
    }

    #[test]
    fn explicit_input_patterns_win() {
        let config = ProjectConfig {
            input_patterns: Some(vec!["less/main.less".to_string()]),
            ..ProjectConfig::default()
        };
        assert_eq!(config.input_patterns(), vec!["less/main.less".to_string()]);
    }

    #[test]
    fn relative_style_path_requires_separator() {
        let config = ProjectConfig::default();
        assert_eq!(config.relative_style_path("lessons/a.less"), None);
        assert_eq!(config.relative_style_path("less/"), None);
        assert_eq!(config.relative_style_path("less/a.less"), Some("a.less"));
    }

    #[test]
    fn manifest_path_joins_out_dir() {
        let config = ProjectConfig::default();
        assert_eq!(
            config.manifest_path(Path::new("/project")),
            PathBuf::from("/project/tmp/vite/manifest.json")
        );
    }
}
