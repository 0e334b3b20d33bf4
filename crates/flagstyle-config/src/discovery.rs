//! Locating the project config file.
//!
//! Parsing is left to the caller's layered loader; this module only decides
//! which file holds the configuration and in which format.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Dedicated config file name
pub const CONFIG_FILE: &str = "flagstyle.toml";

/// Field of `package.json` holding the configuration
pub const PACKAGE_FIELD: &str = "flagstyle";

/// A config file together with its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Toml(PathBuf),
    Json(PathBuf),
    /// `package.json`, of which only the `flagstyle` field is configuration
    PackageJson(PathBuf),
}

impl ConfigSource {
    /// Classify a file by name and extension.
    ///
    /// Returns `None` for formats that are not supported.
    ///
    /// ```
    /// use flagstyle_config::ConfigSource;
    ///
    /// assert!(matches!(ConfigSource::from_path("web/package.json"), Some(ConfigSource::PackageJson(_))));
    /// assert!(matches!(ConfigSource::from_path("ci.toml"), Some(ConfigSource::Toml(_))));
    /// assert_eq!(ConfigSource::from_path("config.yaml"), None);
    /// ```
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if path.file_name().is_some_and(|name| name == "package.json") {
            return Some(Self::PackageJson(path));
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Self::Toml(path)),
            Some("json") => Some(Self::Json(path)),
            _ => None,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Toml(path) | Self::Json(path) | Self::PackageJson(path) => path,
        }
    }
}

/// Finds the config file of a project root.
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// `flagstyle.toml` when present, else `package.json` if it carries a
    /// non-null `flagstyle` field.
    ///
    /// # Errors
    ///
    /// A `package.json` that cannot be read or parsed is reported rather than
    /// skipped, so a typo there does not silently fall back to the defaults.
    pub fn find(&self) -> Result<Option<ConfigSource>> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.is_file() {
            return Ok(Some(ConfigSource::Toml(toml_path)));
        }

        let pkg_path = self.root.join("package.json");
        if !pkg_path.is_file() {
            debug!("No config file under {}", self.root.display());
            return Ok(None);
        }

        let has_section = package_section(&pkg_path)?.is_some();
        Ok(has_section.then_some(ConfigSource::PackageJson(pkg_path)))
    }
}

/// The `flagstyle` field of a `package.json`, `None` when absent or null.
pub fn package_section(path: &Path) -> Result<Option<Value>> {
    let content = std::fs::read_to_string(path)?;
    let mut parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("{}: {e}", path.display())),
    })?;

    Ok(parsed
        .get_mut(PACKAGE_FIELD)
        .map(Value::take)
        .filter(|section| !section.is_null()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ConfigDiscovery::new(dir.path()).find().unwrap(), None);
    }

    #[test]
    fn find_ignores_package_json_without_section() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "app" }"#).unwrap();
        assert_eq!(ConfigDiscovery::new(dir.path()).find().unwrap(), None);
    }

    #[test]
    fn find_reports_malformed_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{ name: ").unwrap();
        let err = ConfigDiscovery::new(dir.path()).find().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "package.json"));
    }

    #[test]
    fn package_section_extracts_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{ "flagstyle": { "out_dir": "build/vite" } }"#).unwrap();

        let section = package_section(&path).unwrap().unwrap();
        assert_eq!(section["out_dir"], "build/vite");
    }

    #[test]
    fn unsupported_extension_is_unclassified() {
        assert_eq!(ConfigSource::from_path("flagstyle.yml"), None);
        assert_eq!(
            ConfigSource::from_path("conf/flagstyle.json").unwrap().path(),
            Path::new("conf/flagstyle.json")
        );
    }
}
