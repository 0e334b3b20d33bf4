//! Out-of-process bundler invocation.

use std::path::Path;

use tokio::process::Command;
use tracing::{debug, info};

use crate::input::InputOption;
use crate::{Error, Result};

/// Environment variable carrying the expanded input option as JSON.
///
/// The bundler config reads it to pick up generated variant files.
pub const INPUTS_ENV: &str = "FLAGSTYLE_INPUTS";

/// Command line of the bundler that runs between the two plugin hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalBundler {
    program: String,
    args: Vec<String>,
}

impl ExternalBundler {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a command line given as separate words, e.g. from `-- vite build`.
    ///
    /// Returns `None` for an empty command line.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full command line for messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the bundler in `cwd` and wait for it to finish.
    ///
    /// Standard streams are inherited.
    ///
    /// # Errors
    ///
    /// `Error::Spawn` when the program cannot be started and
    /// `Error::ExternalCommand` when it exits unsuccessfully.
    pub async fn run(&self, cwd: &Path, input: &InputOption) -> Result<()> {
        let command = self.display();
        let inputs = serde_json::to_string(input)?;
        debug!("Running '{}' in {} with {} inputs", command, cwd.display(), input.len());

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd)
            .env(INPUTS_ENV, inputs)
            .status()
            .await
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::ExternalCommand {
                command,
                code: status.code(),
            });
        }

        info!("'{}' finished", command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_argv_splits_program() {
        let argv = vec!["vite".to_string(), "build".to_string(), "--mode=prod".to_string()];
        let bundler = ExternalBundler::from_argv(&argv).unwrap();
        assert_eq!(bundler.program(), "vite");
        assert_eq!(bundler.args(), ["build", "--mode=prod"]);
        assert_eq!(bundler.display(), "vite build --mode=prod");
        assert!(ExternalBundler::from_argv(&[]).is_none());
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let bundler = ExternalBundler::new("flagstyle-no-such-bundler", Vec::<String>::new());
        let err = bundler
            .run(Path::new("."), &InputOption::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_reported() {
        let bundler = ExternalBundler::new("sh", ["-c", "exit 3"]);
        match bundler.run(Path::new("."), &InputOption::default()).await {
            Err(Error::ExternalCommand { code, .. }) => assert_eq!(code, Some(3)),
            other => panic!("expected exit failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn inputs_are_passed_through_the_environment() {
        let dir = tempfile::TempDir::new().unwrap();
        let script = format!("printf '%s' \"${INPUTS_ENV}\" > seen.json");
        let bundler = ExternalBundler::new("sh", ["-c".to_string(), script]);
        let input = InputOption::Multiple(vec!["less/app.less".into()]);

        bundler.run(dir.path(), &input).await.unwrap();

        let seen = std::fs::read_to_string(dir.path().join("seen.json")).unwrap();
        assert_eq!(seen, r#"["less/app.less"]"#);
    }
}
