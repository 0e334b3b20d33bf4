use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Input option handed to the bundler.
///
/// Mirrors the three shapes bundlers accept for their entry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputOption {
    /// Single entry point.
    Single(String),

    /// Multiple entry points with automatic naming.
    Multiple(Vec<String>),

    /// Named entry points.
    ///
    /// Keys are the output chunk names, values are the import paths.
    Named(IndexMap<String, String>),
}

impl InputOption {
    /// Register additional input paths.
    ///
    /// A single entry is promoted to a list. Named entries gain one entry per
    /// path, keyed by the path itself.
    ///
    /// ```
    /// use flagstyle_bundler::InputOption;
    ///
    /// let mut input = InputOption::Single("less/app.less".into());
    /// input.extend(["less/features/all/app.less".to_string()]);
    /// assert_eq!(
    ///     input,
    ///     InputOption::Multiple(vec![
    ///         "less/app.less".into(),
    ///         "less/features/all/app.less".into(),
    ///     ])
    /// );
    /// ```
    pub fn extend<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = String>,
    {
        match self {
            InputOption::Single(existing) => {
                let mut list = vec![std::mem::take(existing)];
                list.extend(paths);
                *self = InputOption::Multiple(list);
            }
            InputOption::Multiple(list) => list.extend(paths),
            InputOption::Named(map) => {
                for path in paths {
                    map.insert(path.clone(), path);
                }
            }
        }
    }

    /// Import paths in declaration order.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            InputOption::Single(path) => vec![path.as_str()],
            InputOption::Multiple(list) => list.iter().map(String::as_str).collect(),
            InputOption::Named(map) => map.values().map(String::as_str).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            InputOption::Single(_) => 1,
            InputOption::Multiple(list) => list.len(),
            InputOption::Named(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InputOption {
    fn default() -> Self {
        InputOption::Multiple(Vec::new())
    }
}

impl From<Vec<String>> for InputOption {
    fn from(paths: Vec<String>) -> Self {
        InputOption::Multiple(paths)
    }
}

impl From<String> for InputOption {
    fn from(path: String) -> Self {
        InputOption::Single(path)
    }
}

impl TryFrom<Value> for InputOption {
    type Error = Error;

    /// Convert a host-provided JSON value, naming the offending shape on failure.
    fn try_from(value: Value) -> Result<Self> {
        let shape = describe(&value);
        match value {
            Value::String(path) => Ok(InputOption::Single(path)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(path) => Ok(path),
                    other => Err(Error::UnsupportedInput {
                        shape: format!("a list containing {}", describe(&other)),
                    }),
                })
                .collect::<Result<Vec<_>>>()
                .map(InputOption::Multiple),
            Value::Object(map) => map
                .into_iter()
                .map(|(name, item)| match item {
                    Value::String(path) => Ok((name, path)),
                    other => Err(Error::UnsupportedInput {
                        shape: format!("a map containing {}", describe(&other)),
                    }),
                })
                .collect::<Result<IndexMap<_, _>>>()
                .map(InputOption::Named),
            _ => Err(Error::UnsupportedInput { shape }),
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
    .to_string()
}
