//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::Path;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate project configuration
    fn validate(&self, config: &ProjectConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use flagstyle_config::{ProjectConfig, SchemaValidator, ConfigValidator};
///
/// let config = ProjectConfig::default();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &ProjectConfig) -> Result<()> {
        if config.source_root.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "source_root cannot be empty".to_string(),
                hint: Some("Point source_root at your stylesheet directory".to_string()),
            });
        }

        for (field, ext) in [
            ("source_ext", &config.source_ext),
            ("target_ext", &config.target_ext),
        ] {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(ConfigError::SchemaValidation {
                    message: format!("{field} must be a bare extension, got '{ext}'"),
                    hint: Some("Write extensions without the leading dot, e.g. \"less\"".into()),
                });
            }
        }

        // Variants must be reachable by the relocation pattern
        if config.relative_style_path(&config.flag_dir).is_none() {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "flag_dir '{}' is not inside source_root '{}'",
                    config.flag_dir, config.source_root
                ),
                hint: Some("Place flag_dir below source_root, e.g. \"less/features\"".into()),
            });
        }

        if config.static_css_dir == config.out_dir {
            return Err(ConfigError::SchemaValidation {
                message: "static_css_dir and out_dir must differ".to_string(),
                hint: Some("The bundler output directory is temporary".to_string()),
            });
        }

        if config.manifest_file.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "manifest_file cannot be empty".to_string(),
                hint: None,
            });
        }

        if let Some(patterns) = &config.input_patterns {
            if patterns.iter().any(|p| p.trim_start_matches('!').trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: "input patterns cannot be empty".to_string(),
                    hint: Some("Remove empty strings from 'input_patterns'".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that the source root and the declaration file exist on disk.
///
/// # Example
///
/// ```no_run
/// use flagstyle_config::{ProjectConfig, FsValidator, ConfigValidator};
///
/// let validator = FsValidator::new(".");
/// validator.validate(&ProjectConfig::default()).unwrap();
/// ```
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &ProjectConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        let source_root = self.root.join(&config.source_root);
        if !source_root.is_dir() {
            return Err(ConfigError::SourceRootNotFound { path: source_root });
        }

        let flags_file = self.root.join(&config.flags_file);
        if !flags_file.is_file() {
            return Err(ConfigError::DeclarationsNotFound { path: flags_file });
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &ProjectConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &ProjectConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn schema_validator_accepts_defaults() {
        assert!(SchemaValidator.validate(&ProjectConfig::default()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_dotted_extension() {
        let config = ProjectConfig {
            target_ext: ".css".to_string(),
            ..ProjectConfig::default()
        };
        assert!(matches!(
            SchemaValidator.validate(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn schema_validator_rejects_flag_dir_outside_source_root() {
        let config = ProjectConfig {
            flag_dir: "generated/features".to_string(),
            ..ProjectConfig::default()
        };
        assert!(matches!(
            SchemaValidator.validate(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn schema_validator_rejects_shared_output_dirs() {
        let config = ProjectConfig {
            static_css_dir: PathBuf::from("tmp/vite"),
            ..ProjectConfig::default()
        };
        assert!(matches!(
            SchemaValidator.validate(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn schema_validator_rejects_empty_pattern() {
        let config = ProjectConfig {
            input_patterns: Some(vec!["less/**/*.less".to_string(), "!".to_string()]),
            ..ProjectConfig::default()
        };
        assert!(matches!(
            SchemaValidator.validate(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn validate_schema_helper_works() {
        assert!(validate_schema(&ProjectConfig::default()).is_ok());
    }
}
