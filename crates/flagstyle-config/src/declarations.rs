//! Feature flag declaration file.
//!
//! The declaration file lists the flags known to the build and the stylesheets
//! that get a variant per flag:
//!
//! ```json
//! {
//!   "featureFlags": { "newHeader": { "owner": "web" }, "darkMode": {} },
//!   "styles": ["less/button.less", "less/page/top.less"]
//! }
//! ```
//!
//! Flag metadata is opaque; only the keys matter, in document order.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::ALL_FLAGS_DIR;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagDeclarations {
    /// Flag name to free-form metadata
    pub feature_flags: IndexMap<String, Value>,

    /// Source stylesheets that receive variants
    pub styles: Vec<String>,
}

impl FlagDeclarations {
    /// Read and validate a declaration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DeclarationsNotFound` when the file is missing and
    /// `ConfigError::InvalidDeclarations` when it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::DeclarationsNotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Io(e),
        })?;

        let declarations: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidDeclarations {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        declarations.validate()?;

        debug!(
            "Loaded {} flags and {} styles from {}",
            declarations.feature_flags.len(),
            declarations.styles.len(),
            path.display()
        );

        Ok(declarations)
    }

    /// Flag names in declaration order.
    pub fn flag_names(&self) -> impl Iterator<Item = &str> {
        self.feature_flags.keys().map(String::as_str)
    }

    /// Check that every flag can be written as a stylesheet variable.
    pub fn validate(&self) -> Result<()> {
        for name in self.feature_flags.keys() {
            if name == ALL_FLAGS_DIR {
                return Err(ConfigError::ReservedFlagName { name: name.clone() });
            }
            if !is_variable_name(name) {
                return Err(ConfigError::InvalidFlagName { name: name.clone() });
            }
        }
        Ok(())
    }
}

// Less accepts digits anywhere in a variable name, `@1col` included
fn is_variable_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("feature-flags.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_keeps_flag_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"{
                "featureFlags": { "zeta": {}, "alpha": { "owner": "web" }, "mid": true },
                "styles": ["less/button.less"]
            }"#,
        );

        let declarations = FlagDeclarations::load(&path).unwrap();
        let names: Vec<_> = declarations.flag_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(declarations.styles, vec!["less/button.less".to_string()]);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = FlagDeclarations::load(dir.path().join("nope.json"));
        assert!(matches!(
            result,
            Err(ConfigError::DeclarationsNotFound { .. })
        ));
    }

    #[test]
    fn load_reports_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "{ featureFlags: ");
        assert!(matches!(
            FlagDeclarations::load(&path),
            Err(ConfigError::InvalidDeclarations { .. })
        ));
    }

    #[test]
    fn load_requires_both_sections() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"{ "featureFlags": {} }"#);
        assert!(matches!(
            FlagDeclarations::load(&path),
            Err(ConfigError::InvalidDeclarations { .. })
        ));
    }

    #[test]
    fn validate_rejects_reserved_name() {
        let mut declarations = FlagDeclarations::default();
        declarations
            .feature_flags
            .insert("all".to_string(), Value::Null);
        assert!(matches!(
            declarations.validate(),
            Err(ConfigError::ReservedFlagName { .. })
        ));
    }

    #[test]
    fn validate_rejects_non_identifier() {
        for bad in ["", "has space", "semi;colon", "a/b", "..", "dark.mode"] {
            let mut declarations = FlagDeclarations::default();
            declarations.feature_flags.insert(bad.to_string(), Value::Null);
            assert!(
                matches!(
                    declarations.validate(),
                    Err(ConfigError::InvalidFlagName { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn validate_accepts_common_names() {
        let mut declarations = FlagDeclarations::default();
        for good in ["newHeader", "dark-mode", "_beta", "v2_layout", "1col", "2024"] {
            declarations.feature_flags.insert(good.to_string(), Value::Null);
        }
        assert!(declarations.validate().is_ok());
    }
}
