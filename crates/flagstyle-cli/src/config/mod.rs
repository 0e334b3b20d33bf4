//! Layered configuration loading for the CLI.
//!
//! Merges settings from command-line flags, environment variables and the
//! config file on top of the built-in layout.
//! Priority: CLI > Environment (`FLAGSTYLE_*`) > File > Defaults


use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use flagstyle_bundler::INPUTS_ENV;
use flagstyle_config::{ConfigDiscovery, ConfigSource, ProjectConfig, package_section};
use serde_json::{Map, Value};
use tracing::debug;

use crate::cli::ProjectArgs;
use crate::error::{ConfigError, Result};

/// Prefix of configuration environment variables, e.g. `FLAGSTYLE_OUT_DIR`.
pub const ENV_PREFIX: &str = "FLAGSTYLE_";

/// Load the project configuration for `root`.
///
/// `args.config` names the config file explicitly; otherwise `flagstyle.toml`
/// or the `flagstyle` field of `package.json` is used when present.
pub fn load_config(root: &Path, args: &ProjectArgs) -> Result<ProjectConfig> {
    let mut figment = Figment::new().merge(Serialized::defaults(ProjectConfig::default()));

    if let Some(source) = config_file(root, args.config.as_deref())? {
        debug!("Loading config from {}", source.path().display());
        figment = merge_file(figment, &source)?;
    }

    // The inputs variable belongs to the bundler hand-off, not to the config
    let inputs_key = INPUTS_ENV.trim_start_matches(ENV_PREFIX).to_lowercase();
    figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&[inputs_key.as_str()]));

    let overrides = cli_overrides(args);
    if !overrides.is_empty() {
        figment = figment.merge(Serialized::defaults(Value::Object(overrides)));
    }

    figment.extract().map_err(|e| {
        ConfigError::InvalidValue {
            field: "configuration".to_string(),
            value: e.to_string(),
            hint: "Check flagstyle.toml and FLAGSTYLE_* variables for field names and types".to_string(),
        }
        .into()
    })
}

fn config_file(root: &Path, explicit: Option<&Path>) -> Result<Option<ConfigSource>> {
    match explicit {
        Some(path) => {
            let path = root.join(path);
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            ConfigSource::from_path(&path)
                .map(Some)
                .ok_or_else(|| ConfigError::UnsupportedFormat(path).into())
        }
        None => Ok(ConfigDiscovery::new(root).find()?),
    }
}

fn merge_file(figment: Figment, source: &ConfigSource) -> Result<Figment> {
    let merged = match source {
        ConfigSource::Toml(path) => figment.merge(Toml::file(path)),
        ConfigSource::Json(path) => figment.merge(Json::file(path)),
        // Only the "flagstyle" field is configuration
        ConfigSource::PackageJson(path) => match package_section(path)? {
            Some(section) => figment.merge(Serialized::defaults(section)),
            None => figment,
        },
    };
    Ok(merged)
}

fn cli_overrides(args: &ProjectArgs) -> Map<String, Value> {
    let mut overrides = Map::new();
    let paths = [
        ("flags_file", &args.flags_file),
        ("out_dir", &args.out_dir),
        ("static_css_dir", &args.static_dir),
    ];
    for (key, value) in paths {
        if let Some(path) = value {
            overrides.insert(key.to_string(), Value::String(path.to_string_lossy().into_owned()));
        }
    }
    overrides
}
