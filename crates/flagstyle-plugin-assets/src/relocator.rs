//! Manifest-driven relocation
//!
//! Manifest key `less/page/top.less` with emitted file `assets/top.a1b2.css`
//! is copied from `<out_dir>/assets/top.a1b2.css` to
//! `<static_css_dir>/page/top.css`. Keys outside the source root, or with
//! another extension, are skipped.

use std::path::PathBuf;

use flagstyle_bundler::output::{copy_file, validate_output_path};
use flagstyle_bundler::{BuildManifest, join_all_fallible};
use regex::Regex;
use tracing::{debug, info};

use crate::config::RelocateOptions;
use crate::error::{RelocateError, Result};

/// One file copied into the static tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedAsset {
    /// Manifest key that selected the entry
    pub key: String,
    pub source: PathBuf,
    pub target: PathBuf,
    /// Bytes written to `target`
    pub bytes: u64,
}

/// Matches manifest keys of source stylesheets, capturing the path between
/// the source root and the extension.
#[derive(Debug, Clone)]
pub struct KeyMatcher {
    regex: Regex,
}

impl KeyMatcher {
    pub fn new(source_root: &str, source_ext: &str) -> Result<Self> {
        let pattern = format!(
            r"^{}/(?P<path>.+)\.{}$",
            regex::escape(source_root),
            regex::escape(source_ext)
        );
        let regex = Regex::new(&pattern)
            .map_err(|source| RelocateError::InvalidMatcher { pattern, source })?;
        Ok(Self { regex })
    }

    /// Captured path for a matching key
    ///
    /// ```
    /// use flagstyle_plugin_assets::KeyMatcher;
    ///
    /// let matcher = KeyMatcher::new("less", "less").unwrap();
    /// assert_eq!(matcher.capture("less/page/top.less"), Some("page/top"));
    /// assert_eq!(matcher.capture("script.js"), None);
    /// ```
    pub fn capture<'a>(&self, key: &'a str) -> Option<&'a str> {
        self.regex
            .captures(key)
            .and_then(|caps| caps.name("path"))
            .map(|m| m.as_str())
    }
}

/// Copy every matching manifest entry into the static tree.
///
/// Copies run concurrently and overwrite existing targets. The first failure
/// is returned; copies that already finished stay on disk. The result is
/// sorted by target path.
pub async fn relocate_outputs(
    options: &RelocateOptions,
    manifest: &BuildManifest,
) -> Result<Vec<CopiedAsset>> {
    let matcher = KeyMatcher::new(&options.source_root, &options.source_ext)?;
    let out_dir = options.out_dir_path();
    let static_dir = options.static_css_path();

    let mut planned = Vec::new();
    for (key, entry) in manifest.iter() {
        let Some(captured) = matcher.capture(key) else {
            debug!("Skipping manifest entry '{}'", key);
            continue;
        };

        let invalid = |source| RelocateError::InvalidEntry {
            key: key.to_string(),
            source,
        };
        let source = validate_output_path(&out_dir, &entry.file).map_err(invalid)?;
        let target = validate_output_path(&static_dir, &format!("{captured}.{}", options.target_ext))
            .map_err(invalid)?;
        planned.push(CopiedAsset {
            key: key.to_string(),
            source,
            target,
            bytes: 0,
        });
    }

    let mut copied = join_all_fallible(planned.into_iter().map(|mut asset| async move {
        asset.bytes = copy_file(&asset.source, &asset.target)
            .await
            .map_err(|source| RelocateError::CopyFailed {
                from: asset.source.clone(),
                to: asset.target.clone(),
                source,
            })?;
        info!("copied asset: {} to {}", asset.source.display(), asset.target.display());
        Ok::<_, RelocateError>(asset)
    }))
    .await?;

    copied.sort_by(|a, b| a.target.cmp(&b.target));
    Ok(copied)
}

/// Load the manifest named by `options` and relocate its stylesheets.
pub async fn relocate(options: &RelocateOptions) -> Result<Vec<CopiedAsset>> {
    let path = options.manifest_path();
    let manifest = BuildManifest::load(&path)
        .await
        .map_err(|source| RelocateError::Manifest { path, source })?;
    relocate_outputs(options, &manifest).await
}
