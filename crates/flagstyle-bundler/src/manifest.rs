//! Bundler manifest model.
//!
//! The manifest maps logical input keys to the files the bundler emitted:
//!
//! ```json
//! {
//!   "less/button.less": { "file": "assets/button.a1b2.css", "isEntry": true, "src": "less/button.less" },
//!   "main.js": { "file": "assets/main.c3d4.js", "isEntry": true }
//! }
//! ```
//!
//! Fields other than `file`, `isEntry` and `src` are ignored.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One emitted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Emitted file, relative to the bundler output directory
    pub file: String,

    #[serde(default)]
    pub is_entry: bool,

    /// Original source path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl ManifestEntry {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            is_entry: false,
            src: None,
        }
    }

    pub fn entry(mut self, is_entry: bool) -> Self {
        self.is_entry = is_entry;
        self
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }
}

/// Key to entry mapping written by the bundler, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildManifest {
    entries: IndexMap<String, ManifestEntry>,
}

impl BuildManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a manifest from disk.
    ///
    /// # Errors
    ///
    /// `Error::ManifestNotFound` when the file does not exist,
    /// `Error::InvalidManifest` when it is not a key to entry map.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::ManifestNotFound {
                    path: path.to_path_buf(),
                },
                _ => Error::Io(e),
            })?;

        serde_json::from_str(&content).map_err(|e| Error::InvalidManifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: ManifestEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&ManifestEntry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ManifestEntry)> for BuildManifest {
    fn from_iter<T: IntoIterator<Item = (String, ManifestEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_parses_vite_style_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        tokio::fs::write(
            &path,
            r#"{
                "less/button.less": { "file": "assets/button.a1b2.css", "isEntry": true, "src": "less/button.less" },
                "main.js": { "file": "assets/main.c3d4.js", "isEntry": true, "css": ["x.css"], "imports": [] }
            }"#,
        )
        .await
        .unwrap();

        let manifest = BuildManifest::load(&path).await.unwrap();
        assert_eq!(manifest.len(), 2);
        let button = manifest.get("less/button.less").unwrap();
        assert_eq!(button.file, "assets/button.a1b2.css");
        assert!(button.is_entry);
        assert_eq!(button.src.as_deref(), Some("less/button.less"));
        assert_eq!(manifest.get("main.js").unwrap().src, None);
    }

    #[tokio::test]
    async fn load_reports_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let err = BuildManifest::load(dir.path().join("manifest.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ManifestNotFound { .. }));
    }

    #[tokio::test]
    async fn load_reports_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        tokio::fs::write(&path, r#"["not", "a", "map"]"#).await.unwrap();
        let err = BuildManifest::load(&path).await.unwrap_err();
        assert!(matches!(err, Error::InvalidManifest { .. }));
    }

    #[test]
    fn iter_preserves_file_order() {
        let manifest: BuildManifest = [
            ("b".to_string(), ManifestEntry::new("b.css")),
            ("a".to_string(), ManifestEntry::new("a.css").entry(true)),
        ]
        .into_iter()
        .collect();
        let keys: Vec<_> = manifest.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
