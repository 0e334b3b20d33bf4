//! Variant generation
//!
//! ```text
//! declarations ─→ clean stale variants ─→ plan (style × {flag…, all}) ─→ write concurrently
//!                                                                          ↓
//!                                                    merge sorted paths into the input option
//! ```
//!
//! A variant for style `less/page/top.less` and flag `darkMode` lands at
//! `less/features/darkMode/page/top.less` and reads:
//!
//! ```less
//! @darkMode: true;
//! @import 'less/page/top.less';
//! ```

use std::path::{Path, PathBuf};

use flagstyle_bundler::output::{validate_output_path, write_file};
use flagstyle_bundler::{InputOption, join_all_fallible};
use flagstyle_config::{ALL_FLAGS_DIR, FlagDeclarations};
use indexmap::IndexSet;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::VariantOptions;
use crate::error::{Result, VariantError};

/// One file to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Declared style the variant imports
    pub style: String,

    /// Flags enabled in the variant, in declaration order
    pub flags: Vec<String>,

    /// Path relative to the project root, `/`-separated
    pub path: String,

    /// Absolute path on disk
    pub target: PathBuf,
}

impl Variant {
    /// Stylesheet source of the variant
    pub fn source(&self) -> String {
        variant_source(&self.flags, &self.style)
    }
}

/// Build the variant text: one `@<flag>: true;` line per flag, then the import.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn variant_source<S: AsRef<str>>(flags: &[S], style: &str) -> String {
    flags
        .iter()
        .map(|flag| format!("@{}: true;", flag.as_ref()))
        .chain(std::iter::once(format!("@import '{style}';")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every (style, subset) pair the declarations call for.
///
/// Per style: one variant per flag, then the all-flags variant. A style
/// listed twice is planned once.
pub fn plan_variants(options: &VariantOptions, declarations: &FlagDeclarations) -> Result<Vec<Variant>> {
    let flag_dir = options.flag_dir_path();
    let flags: Vec<String> = declarations.flag_names().map(str::to_string).collect();
    let styles: IndexSet<&String> = declarations.styles.iter().collect();
    let mut variants = Vec::with_capacity(styles.len() * (flags.len() + 1));

    for style in styles {
        // Cleanup only finds files with the source extension
        let has_source_ext = Path::new(style.as_str())
            .extension()
            .is_some_and(|ext| ext == options.source_ext.as_str());
        if !has_source_ext {
            return Err(VariantError::style_extension(style, &options.source_ext));
        }

        let relative = options
            .relative_style_path(style)
            .ok_or_else(|| VariantError::style_outside_source_root(style, &options.source_root))?;

        let subsets = flags
            .iter()
            .map(|flag| (flag.as_str(), vec![flag.clone()]))
            .chain(std::iter::once((ALL_FLAGS_DIR, flags.clone())));

        for (subset, enabled) in subsets {
            let target = validate_output_path(&flag_dir, &format!("{subset}/{relative}")).map_err(
                |source| VariantError::InvalidVariantPath {
                    style: style.clone(),
                    source,
                },
            )?;
            variants.push(Variant {
                style: style.clone(),
                flags: enabled,
                path: format!("{}/{subset}/{relative}", options.flag_dir),
                target,
            });
        }
    }

    Ok(variants)
}

/// Delete every generated variant and prune directories left empty.
///
/// Only files with the source extension are removed. The flag directory
/// itself is kept. Returns the number of deleted files.
pub async fn clean_variants(options: &VariantOptions) -> Result<usize> {
    let flag_dir = options.flag_dir_path();
    if !flag_dir.is_dir() {
        debug!("Flag directory {} does not exist, nothing to clean", flag_dir.display());
        return Ok(0);
    }

    let stale = stale_variants(&flag_dir, &options.source_ext)?;
    let removed = stale.len();
    join_all_fallible(stale.into_iter().map(|path| async move {
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| VariantError::remove_failed(path, e))
    }))
    .await?;

    prune_empty_dirs(&flag_dir).await?;
    debug!("Removed {} stale variants from {}", removed, flag_dir.display());
    Ok(removed)
}

/// Write every planned variant concurrently.
///
/// Returns the written paths, relative to the project root and sorted.
pub async fn generate_variants(
    options: &VariantOptions,
    declarations: &FlagDeclarations,
) -> Result<Vec<String>> {
    let variants = plan_variants(options, declarations)?;

    let mut written = join_all_fallible(variants.into_iter().map(|variant| async move {
        write_file(&variant.target, variant.source())
            .await
            .map_err(|source| VariantError::WriteFailed {
                path: variant.target.clone(),
                source,
            })?;
        info!("{} to {} is activated", variant.style, variant.path);
        Ok::<_, VariantError>(variant.path)
    }))
    .await?;

    written.sort();
    Ok(written)
}

/// Regenerate all variants and register them as extra build inputs.
///
/// Loads the declarations, removes stale variants, writes the new ones and
/// appends their paths to `input` in sorted order.
pub async fn prepare_inputs(options: &VariantOptions, mut input: InputOption) -> Result<InputOption> {
    let declarations = FlagDeclarations::load(options.flags_file_path())?;

    clean_variants(options).await?;
    let generated = generate_variants(options, &declarations).await?;

    info!(
        "Generated {} variants for {} styles and {} flags",
        generated.len(),
        declarations.styles.len(),
        declarations.feature_flags.len()
    );
    input.extend(generated);
    Ok(input)
}

fn stale_variants(flag_dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut stale = Vec::new();
    for entry in WalkDir::new(flag_dir) {
        let entry = entry.map_err(|e| VariantError::scan_failed(flag_dir, e))?;
        let is_variant = entry.file_type().is_file()
            && entry.path().extension().is_some_and(|found| found == ext);
        if is_variant {
            stale.push(entry.into_path());
        }
    }
    Ok(stale)
}

async fn prune_empty_dirs(flag_dir: &Path) -> Result<()> {
    // contents_first visits children before their parent
    let mut dirs = Vec::new();
    for entry in WalkDir::new(flag_dir).min_depth(1).contents_first(true) {
        let entry = entry.map_err(|e| VariantError::scan_failed(flag_dir, e))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }

    for dir in dirs {
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| VariantError::remove_failed(&dir, e))?;
        let is_empty = entries
            .next_entry()
            .await
            .map_err(|e| VariantError::remove_failed(&dir, e))?
            .is_none();
        if is_empty {
            tokio::fs::remove_dir(&dir)
                .await
                .map_err(|e| VariantError::remove_failed(&dir, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn declarations(flags: &[&str], styles: &[&str]) -> FlagDeclarations {
        FlagDeclarations {
            feature_flags: flags.iter().map(|f| (f.to_string(), json!({}))).collect(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn source_lists_flags_then_import() {
        assert_eq!(
            variant_source(&["a", "b"], "less/x.less"),
            "@a: true;\n@b: true;\n@import 'less/x.less';"
        );
        assert_eq!(variant_source::<&str>(&[], "less/x.less"), "@import 'less/x.less';");
    }

    #[test]
    fn plan_covers_each_flag_and_all() {
        let options = VariantOptions::default().with_root("/p");
        let planned = plan_variants(
            &options,
            &declarations(&["dark", "beta"], &["less/page/top.less"]),
        )
        .unwrap();

        let paths: Vec<_> = planned.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "less/features/dark/page/top.less",
                "less/features/beta/page/top.less",
                "less/features/all/page/top.less",
            ]
        );
        assert_eq!(planned[2].flags, vec!["dark", "beta"]);
        assert_eq!(planned[0].target, PathBuf::from("/p/less/features/dark/page/top.less"));
    }

    #[test]
    fn plan_rejects_styles_outside_source_root() {
        let options = VariantOptions::default();
        let err = plan_variants(&options, &declarations(&["dark"], &["css/top.less"])).unwrap_err();
        assert!(matches!(err, VariantError::StyleOutsideSourceRoot { .. }));
    }

    #[test]
    fn plan_skips_repeated_styles() {
        let options = VariantOptions::default().with_root("/p");
        let planned = plan_variants(
            &options,
            &declarations(&["f"], &["less/x.less", "less/y.less", "less/x.less"]),
        )
        .unwrap();

        let paths: Vec<_> = planned.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "less/features/f/x.less",
                "less/features/all/x.less",
                "less/features/f/y.less",
                "less/features/all/y.less",
            ]
        );
    }

    #[test]
    fn plan_rejects_styles_without_source_ext() {
        let options = VariantOptions::default();
        for style in ["less/x.css", "less/x", "less/x.less.map"] {
            match plan_variants(&options, &declarations(&["a"], &[style])) {
                Err(VariantError::StyleExtension { style: found, source_ext }) => {
                    assert_eq!(found, style);
                    assert_eq!(source_ext, "less");
                }
                other => panic!("expected extension error for {style}, got {other:?}"),
            }
        }
    }

    #[test]
    fn plan_rejects_escaping_styles() {
        let options = VariantOptions::default();
        let err = plan_variants(&options, &declarations(&["dark"], &["less/../../../etc/x.less"]))
            .unwrap_err();
        assert!(matches!(err, VariantError::InvalidVariantPath { .. }));
    }

    #[tokio::test]
    async fn clean_keeps_foreign_files_and_flag_dir() {
        let dir = TempDir::new().unwrap();
        let options = VariantOptions::default().with_root(dir.path());
        let flag_dir = options.flag_dir_path();
        std::fs::create_dir_all(flag_dir.join("dark/page")).unwrap();
        std::fs::create_dir_all(flag_dir.join("notes")).unwrap();
        std::fs::write(flag_dir.join("dark/page/top.less"), "").unwrap();
        std::fs::write(flag_dir.join("notes/README.md"), "keep").unwrap();

        assert_eq!(clean_variants(&options).await.unwrap(), 1);
        assert!(!flag_dir.join("dark").exists());
        assert!(flag_dir.join("notes/README.md").exists());
        assert!(flag_dir.is_dir());
    }

    #[tokio::test]
    async fn clean_without_flag_dir_is_noop() {
        let dir = TempDir::new().unwrap();
        let options = VariantOptions::default().with_root(dir.path());
        assert_eq!(clean_variants(&options).await.unwrap(), 0);
    }
}
