//! Input enumeration from glob patterns.
//!
//! Patterns are matched against `/`-separated paths relative to the project
//! root. A leading `!` turns a pattern into an exclusion. A file is an input
//! when at least one inclusion matches it and no exclusion does; a directory
//! matched by an exclusion is not descended into.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Enumerates build inputs under a project root.
#[derive(Debug, Clone)]
pub struct InputDiscovery {
    root: PathBuf,
    patterns: Vec<String>,
}

impl InputDiscovery {
    pub fn new<I, S>(root: impl AsRef<Path>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.as_ref().to_path_buf(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Matching files as sorted, root-relative, `/`-separated paths.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` for a pattern that does not compile and
    /// `Error::Io` when a directory cannot be read.
    pub fn discover(&self) -> Result<Vec<String>> {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();
        for raw in &self.patterns {
            match raw.strip_prefix('!') {
                Some(negated) => excludes.push(compile(negated)?),
                None => includes.push((compile(raw)?, literal_base(raw))),
            }
        }

        let mut found = BTreeSet::new();
        for (pattern, base) in &includes {
            let start = self.root.join(base);
            if !start.exists() {
                debug!("Input base {} does not exist, skipping", start.display());
                continue;
            }

            let walker = WalkDir::new(&start)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| {
                    !entry.file_type().is_dir()
                        || relative_slash(&self.root, entry.path())
                            .is_none_or(|rel| !is_excluded(&excludes, &rel))
                });

            for entry in walker {
                let entry = entry.map_err(|e| match e.into_io_error() {
                    Some(io) => Error::Io(io),
                    None => Error::InvalidConfig("filesystem loop while walking inputs".into()),
                })?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let Some(rel) = relative_slash(&self.root, entry.path()) else {
                    continue;
                };
                if pattern.matches_with(&rel, MATCH_OPTIONS) && !is_excluded(&excludes, &rel) {
                    found.insert(rel);
                }
            }
        }

        debug!("Discovered {} inputs", found.len());
        Ok(found.into_iter().collect())
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

fn is_excluded(excludes: &[Pattern], rel: &str) -> bool {
    excludes
        .iter()
        .any(|pattern| pattern.matches_with(rel, MATCH_OPTIONS))
}

/// Leading path components that contain no glob metacharacters.
fn literal_base(pattern: &str) -> PathBuf {
    let mut base = PathBuf::new();
    let mut components = pattern.split('/').peekable();
    while let Some(component) = components.next() {
        // The last component names files, never a directory to start from
        if components.peek().is_none() {
            break;
        }
        if component.contains(['*', '?', '[', ']']) {
            break;
        }
        if !component.is_empty() {
            base.push(component);
        }
    }
    base
}

/// `path` relative to `root` with `/` separators.
pub(crate) fn relative_slash(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join("/"))
}
