//! Error types for manifest loading, config construction and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Manifest errors
    #[error("manifest is missing required field `{field}`")]
    MissingField { field: String },

    #[error("invalid value for `{field}`{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Environment flag errors (strict parsing only)
    #[error("unknown environment `{0}` (expected `development` or `production`)")]
    UnknownEnvironment(String),

    // Rule construction errors
    #[error("invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Schema validation errors (no filesystem checks)
    #[error("no entry points specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry source not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    #[error("html template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid_value(field: impl Into<String>, hint: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            hint: Some(hint.into()),
        }
    }

    /// Optional remediation hint attached to the error
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { hint, .. } | ConfigError::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            ConfigError::MissingField { .. } => {
                Some("Add a `dependencies` object to package.json (it may be empty)")
            }
            ConfigError::UnknownEnvironment(_) => {
                Some("Set NODE_ENV to `development` or `production`, or drop --strict-env")
            }
            _ => None,
        }
    }
}
