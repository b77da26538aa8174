//! Resolved build configuration handed to the bundling engine.

mod plugin;
mod rule;

use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::environment::Environment;
use crate::error::{ConfigError, Result};

pub use plugin::PluginInvocation;
pub use rule::{RuleKind, RuleOptions, RulePattern, TransformRule};

/// Namespace build-time defines are injected under
pub const DEFINE_NAMESPACE: &str = "process.env";

/// Source map mode. Production builds leave it unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    /// Each module evaluated with an inline source map (fast rebuilds)
    EvalSourceMap,
}

impl Devtool {
    pub fn as_str(&self) -> &'static str {
        match self {
            Devtool::EvalSourceMap => "eval-source-map",
        }
    }
}

/// Module interop format of the emitted bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryTarget {
    /// `module.exports = ...`, loadable by the shell's `require`
    #[serde(rename = "commonjs2")]
    CommonJs2,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub path: PathBuf,

    /// File name pattern, `[name]` is replaced by the entry point name
    pub filename: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_target: Option<LibraryTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    /// Import prefix → directory
    #[serde(default)]
    pub aliases: IndexMap<String, PathBuf>,

    /// Module-resolution search path
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<PathBuf>,
}

/// Finalized configuration for one build invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub mode: Environment,

    /// Project root all paths are computed from
    pub context: PathBuf,

    /// Bundle target platform
    pub target: String,

    #[serde(default)]
    pub performance_hints: bool,

    /// Bundle name → ordered source files
    pub entry_points: IndexMap<String, Vec<PathBuf>>,

    pub output: OutputOptions,

    /// Ordered transform rules; the first applicable rule wins
    #[serde(default)]
    pub rules: Vec<TransformRule>,

    /// Ordered plugins; list order is execution order
    #[serde(default)]
    pub plugins: Vec<PluginInvocation>,

    #[serde(default)]
    pub resolve: ResolveOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,

    /// Modules left out of the bundle and supplied at runtime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_modules: Option<IndexSet<String>>,

    /// Symbolic name → literal value injected at build time
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub environment_defines: IndexMap<String, Value>,
}

impl BuildConfig {
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| ConfigError::invalid_value("config", e.to_string()))
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid_value("config", e.to_string()))
    }

    /// First rule applicable to `request`
    ///
    /// # Example
    ///
    /// ```
    /// use shellpack_config::{template, RuleKind};
    ///
    /// let config = template::renderer("/app").unwrap();
    /// let rule = config.rule_for("src/renderer/App.vue").unwrap();
    /// assert_eq!(rule.kind, RuleKind::Component);
    /// ```
    pub fn rule_for(&self, request: &str) -> Option<&TransformRule> {
        self.rules.iter().find(|rule| rule.applies_to(request))
    }

    /// Every rule applicable to `request`, in rule order
    pub fn rules_for<'a, 'r>(
        &'a self,
        request: &'r str,
    ) -> impl Iterator<Item = &'a TransformRule> + use<'a, 'r> {
        self.rules.iter().filter(move |rule| rule.applies_to(request))
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(PluginInvocation::name).collect()
    }

    pub fn is_external(&self, module: &str) -> bool {
        self.external_modules
            .as_ref()
            .is_some_and(|externals| externals.contains(module))
    }

    /// Defines flattened into source-expression replacements.
    ///
    /// Keys are qualified with [`DEFINE_NAMESPACE`]; values are JSON-encoded
    /// literals, so the string `production` becomes `"production"` (quoted).
    pub fn define_replacements(&self) -> IndexMap<String, String> {
        self.environment_defines
            .iter()
            .map(|(name, value)| (format!("{DEFINE_NAMESPACE}.{name}"), value.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template;

    #[test]
    fn engine_names_for_devtool_and_library_target() {
        let mut config = template::renderer("/app").unwrap();
        config.devtool = Some(Devtool::EvalSourceMap);
        config.output.library_target = Some(LibraryTarget::CommonJs2);

        let value = config.to_value().unwrap();
        assert_eq!(value["devtool"], "eval-source-map");
        assert_eq!(value["output"]["libraryTarget"], "commonjs2");
    }

    #[test]
    fn from_value_rejects_unsupported_library_target() {
        let mut value = template::renderer("/app").unwrap().to_value().unwrap();
        value["output"]["libraryTarget"] = Value::from("umd");
        assert!(matches!(
            BuildConfig::from_value(value),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "config"
        ));
    }
}
