//! File writing utilities for generated sources and relocated output.
//!
//! # Security Features
//!
//! - **Path Validation**: paths built from external data (manifest file names,
//!   declared styles) are normalized and must stay inside their base directory
//! - **Directory Creation**: parent directories are created with `mkdir -p`
//!   behavior, which tolerates concurrent creation of shared parents

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tokio::fs;

use crate::{Error, Result};

/// Validates an output path to prevent directory traversal attacks.
///
/// It works by:
/// 1. Cleaning the relative path
/// 2. Joining it onto the base directory
/// 3. Cleaning the result again to resolve any remaining `..`
/// 4. Checking that the final path is still under the base directory
pub fn validate_output_path(base_dir: &Path, relative: &str) -> Result<PathBuf> {
    if relative.contains('\0') {
        return Err(Error::InvalidOutputPath(
            "Path contains null byte".to_string(),
        ));
    }

    let base = base_dir.clean();
    let full_path = base.join(Path::new(relative).clean()).clean();

    if !full_path.starts_with(&base) || full_path == base {
        return Err(Error::InvalidOutputPath(format!(
            "Path '{}' escapes directory '{}' (resolved to '{}')",
            relative,
            base.display(),
            full_path.display()
        )));
    }

    Ok(full_path)
}

/// Create the parent directory of `path` if needed.
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create directory '{}': {}", parent.display(), e),
                ))
            })?;
        }
    }
    Ok(())
}

/// Write `contents` to `path`, creating parent directories first.
pub async fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    ensure_parent_dir(path).await?;
    fs::write(path, contents).await.map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write '{}': {}", path.display(), e),
        ))
    })
}

/// Copy `from` to `to`, creating parent directories and overwriting any
/// existing file. Returns the number of bytes copied.
pub async fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    ensure_parent_dir(to).await?;
    fs::copy(from, to).await.map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!(
                "Failed to copy '{}' to '{}': {}",
                from.display(),
                to.display(),
                e
            ),
        ))
    })
}
