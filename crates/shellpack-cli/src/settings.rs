//! Layered CLI settings.
//!
//! Priority: CLI flags > `SHELLPACK_*` > `NODE_ENV` > `shellpack.toml` > defaults

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use shellpack_config::{ConfigResolver, DependencyManifest, Environment, MANIFEST_FILE};

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

pub const SETTINGS_FILE: &str = "shellpack.toml";

const ENV_PREFIX: &str = "SHELLPACK_";
const PREFIXED_ENVIRONMENT: &str = "SHELLPACK_ENVIRONMENT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Project root all config paths are computed from
    pub root: PathBuf,

    /// Dependency manifest, `<root>/package.json` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// Raw environment flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Reject unrecognized environment flags
    #[serde(default)]
    pub strict_environment: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest: None,
            environment: None,
            strict_environment: false,
        }
    }
}

/// Flag values that were actually given on the command line
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    manifest: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strict_environment: Option<bool>,
}

impl From<&ProjectArgs> for Overrides {
    fn from(args: &ProjectArgs) -> Self {
        Self {
            root: args.root.clone(),
            manifest: args.manifest.clone(),
            environment: args.env.clone(),
            strict_environment: args.strict_env.then_some(true),
        }
    }
}

impl Overrides {
    /// Environment flag read verbatim from `var`.
    ///
    /// Env providers type-parse their values (`1` is an integer, `true` a
    /// bool), so the flag is merged as a plain string instead.
    fn raw_flag(var: &str) -> Self {
        Self {
            environment: std::env::var_os(var).map(|value| value.to_string_lossy().into_owned()),
            ..Self::default()
        }
    }
}

impl Settings {
    /// Load settings from every source.
    ///
    /// The settings file is `--config` when given (it must exist), otherwise
    /// `<root>/shellpack.toml` if present.
    ///
    /// # Arguments
    ///
    /// * `args` - Project options given on the command line
    ///
    /// # Errors
    ///
    /// Returns [`CliError::FileNotFound`] when `--config` names a missing
    /// file, and [`CliError::Settings`] when a source has the wrong shape.
    pub fn load(args: &ProjectArgs) -> Result<Self> {
        let settings_file = match &args.config {
            Some(path) if !path.exists() => return Err(CliError::FileNotFound(path.clone())),
            Some(path) => path.clone(),
            None => args
                .root
                .as_deref()
                .unwrap_or(Path::new("."))
                .join(SETTINGS_FILE),
        };

        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if settings_file.exists() {
            figment = figment.merge(Toml::file_exact(&settings_file));
        }

        let settings: Settings = figment
            .merge(Serialized::defaults(Overrides::raw_flag(Environment::VAR)))
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .filter(|key| !key.as_str().eq_ignore_ascii_case("environment")),
            )
            .merge(Serialized::defaults(Overrides::raw_flag(PREFIXED_ENVIRONMENT)))
            .merge(Serialized::defaults(Overrides::from(args)))
            .extract()?;

        tracing::debug!(?settings, file = %settings_file.display(), "loaded settings");
        Ok(settings)
    }

    /// Environment selected by the settings.
    ///
    /// Lenient unless `strict_environment` is set; an absent flag is
    /// development either way.
    pub fn environment(&self) -> Result<Environment> {
        match (&self.environment, self.strict_environment) {
            (Some(flag), true) => Ok(flag.parse()?),
            (flag, _) => Ok(Environment::from_flag(flag.as_deref())),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| self.root.join(MANIFEST_FILE))
    }

    /// Load the manifest and build a resolver rooted at the absolute project root
    pub fn resolver(&self) -> Result<ConfigResolver> {
        let root = std::path::absolute(&self.root)?;
        let manifest = DependencyManifest::from_path(self.manifest_path())?;
        Ok(ConfigResolver::with_manifest(root, manifest)?)
    }
}
