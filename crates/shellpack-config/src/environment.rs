//! Build environment flag.
//!
//! The flag is conventionally sourced from `NODE_ENV`. Two parsers are offered:
//! [`Environment::from_flag`] falls back to development for anything other than
//! `"production"`, while the [`FromStr`] impl rejects unknown values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Target environment of a build invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Source maps, externalized dependencies (default)
    #[default]
    Development,
    /// Minified output with CSS extraction and build-time defines
    Production,
}

impl Environment {
    /// Process environment variable holding the flag
    pub const VAR: &'static str = "NODE_ENV";

    /// Lenient parse: only the exact string `"production"` selects production.
    ///
    /// Absent or unrecognized values resolve to development. Unrecognized
    /// values are logged so the fallback does not go unnoticed.
    ///
    /// # Example
    ///
    /// ```
    /// use shellpack_config::Environment;
    ///
    /// assert_eq!(Environment::from_flag(Some("production")), Environment::Production);
    /// assert_eq!(Environment::from_flag(Some("staging")), Environment::Development);
    /// assert_eq!(Environment::from_flag(None), Environment::Development);
    /// ```
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("production") => Environment::Production,
            Some("development") | None => Environment::Development,
            Some(other) => {
                tracing::warn!(
                    environment = other,
                    "unrecognized environment, falling back to development"
                );
                Environment::Development
            }
        }
    }

    /// Read the flag from `NODE_ENV` using the lenient parser
    pub fn from_process_env() -> Self {
        let flag = std::env::var(Self::VAR).ok();
        Self::from_flag(flag.as_deref())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
