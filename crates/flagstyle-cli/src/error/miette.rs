//! Miette diagnostic conversion for CLI errors.
//!
//! Library errors that implement `Diagnostic` keep their codes and help text;
//! everything else is rendered from its message.

use miette::Report;

use crate::error::{BuildError, CliError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert BuildError to miette Report
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::Variants(e) => Report::new(e),
        BuildError::Relocate(e) => Report::new(e),
        BuildError::Pipeline(e) => miette::miette!("{}", e),
        BuildError::MissingCommand => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_codes_survive() {
        let err = CliError::from(flagstyle_plugin_flags::VariantError::style_outside_source_root(
            "css/a.less",
            "less",
        ));
        let report = cli_error_to_miette(err);
        let code = report.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("flagstyle::flags::style_outside_source_root"));
    }

    #[test]
    fn plain_errors_keep_message() {
        let report = cli_error_to_miette(CliError::InvalidArgument("bad".into()));
        assert_eq!(report.to_string(), "Invalid argument: bad");
    }
}
