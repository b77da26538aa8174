//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use crate::build::{BuildConfig, Devtool, PluginInvocation};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use shellpack_config::{template, ConfigValidator, SchemaValidator};
///
/// let config = template::renderer("/app").unwrap();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.entry_points.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, sources) in &config.entry_points {
            if sources.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry point `{name}` has no source files"),
                    hint: Some("List at least one source file per entry point".to_string()),
                });
            }
        }

        // Several bundles written to one fixed name would overwrite each other
        if config.entry_points.len() > 1 && !config.output.filename.contains("[name]") {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "output filename `{}` is shared by {} entry points",
                    config.output.filename,
                    config.entry_points.len()
                ),
                hint: Some("Include `[name]` in the output filename".to_string()),
            });
        }

        if config.resolve.aliases.keys().any(|alias| alias.trim().is_empty()) {
            return Err(ConfigError::SchemaValidation {
                message: "alias names cannot be empty".to_string(),
                hint: None,
            });
        }

        if let Some(externals) = &config.external_modules {
            if externals.iter().any(|name| name.trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: "external module names cannot be empty".to_string(),
                    hint: Some("Remove empty keys from `dependencies`".to_string()),
                });
            }
        }

        for plugin in &config.plugins {
            if plugin.emitted_file().is_some_and(|file| file.trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("plugin `{}` has an empty output filename", plugin.name()),
                    hint: None,
                });
            }
        }

        if config.mode.is_production() && matches!(config.devtool, Some(Devtool::EvalSourceMap)) {
            return Err(ConfigError::SchemaValidation {
                message: "eval source maps are not allowed in production".to_string(),
                hint: Some("Remove `devtool` from production configs".to_string()),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Checks that entry sources and HTML templates exist. Missing alias
/// directories only produce a warning.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for source in config.entry_points.values().flatten() {
            let path = self.root.join(source);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound(path));
            }
        }

        for plugin in &config.plugins {
            if let PluginInvocation::HtmlScaffold { template, .. } = plugin {
                let path = self.root.join(template);
                if !path.exists() {
                    return Err(ConfigError::TemplateNotFound(path));
                }
            }
        }

        for (alias, dir) in &config.resolve.aliases {
            let path = self.root.join(dir);
            if !path.is_dir() {
                tracing::warn!(
                    alias = %alias,
                    path = %path.display(),
                    "alias directory does not exist"
                );
            }
        }

        Ok(())
    }
}
