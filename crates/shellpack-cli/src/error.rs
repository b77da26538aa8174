//! Error handling for the shellpack CLI.
//!
//! Commands return [`CliError`]; `main` converts it into a `miette` report so
//! hints from the config crate are shown as diagnostic help.

use std::path::PathBuf;

use miette::{MietteDiagnostic, Report};
use shellpack_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest, environment or validation errors from the config crate
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Layered settings could not be extracted
    #[error("Settings error: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// A file named on the command line doesn't exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        CliError::Settings(Box::new(err))
    }
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => {
            let mut diagnostic = MietteDiagnostic::new(format!("Configuration error: {e}"));
            if let Some(hint) = e.hint() {
                diagnostic = diagnostic.with_help(hint);
            }
            Report::new(diagnostic)
        }
        CliError::FileNotFound(path) => Report::new(
            MietteDiagnostic::new(format!("File not found: {}", path.display()))
                .with_help("Check the --config and --manifest paths"),
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_carry_hint() {
        let err = CliError::from(ConfigError::MissingField {
            field: "dependencies".to_string(),
        });
        let report = cli_error_to_miette(err);
        assert!(report.to_string().contains("dependencies"));
        assert!(report.help().is_some());
    }

    #[test]
    fn other_errors_render_message() {
        let err = CliError::FileNotFound(PathBuf::from("shellpack.toml"));
        assert_eq!(err.to_string(), "File not found: shellpack.toml");
    }
}
