//! Environment overlays over the base template.
//!
//! Resolution clones the base and applies one overlay to the copy. The base
//! is never mutated, so a single resolver can serve any number of callers.

use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde_json::{Value, json};

use crate::build::{BuildConfig, DEFINE_NAMESPACE, Devtool, LibraryTarget, PluginInvocation};
use crate::environment::Environment;
use crate::error::Result;
use crate::manifest::DependencyManifest;
use crate::template::{self, COMPONENT_LOADER};

/// Produces a finalized [`BuildConfig`] for an environment
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    base: BuildConfig,
    manifest: DependencyManifest,
}

impl ConfigResolver {
    pub fn new(base: BuildConfig, manifest: DependencyManifest) -> Self {
        Self { base, manifest }
    }

    /// Renderer template plus `<root>/package.json`.
    ///
    /// # Errors
    ///
    /// Fails if the manifest cannot be read or lacks `dependencies`.
    pub fn for_project(project_root: impl AsRef<Path>) -> Result<Self> {
        let root = project_root.as_ref();
        let manifest = DependencyManifest::load(root)?;
        Self::with_manifest(root, manifest)
    }

    /// Renderer template with an already loaded manifest
    pub fn with_manifest(
        project_root: impl AsRef<Path>,
        manifest: DependencyManifest,
    ) -> Result<Self> {
        Ok(Self::new(template::renderer(project_root)?, manifest))
    }

    pub fn base(&self) -> &BuildConfig {
        &self.base
    }

    pub fn manifest(&self) -> &DependencyManifest {
        &self.manifest
    }

    /// Resolve the config for `environment`.
    ///
    /// # Example
    ///
    /// ```
    /// use shellpack_config::{ConfigResolver, DependencyManifest, Environment};
    ///
    /// let manifest = DependencyManifest::default()
    ///     .with_dependency("vue", "2.5.0")
    ///     .with_dependency("axios", "0.18.0");
    /// let resolver = ConfigResolver::with_manifest("/app", manifest).unwrap();
    ///
    /// let dev = resolver.resolve(Environment::Development);
    /// assert!(dev.is_external("vue"));
    ///
    /// let prod = resolver.resolve(Environment::Production);
    /// assert_eq!(prod.plugins.len(), dev.plugins.len() + 2);
    /// ```
    pub fn resolve(&self, environment: Environment) -> BuildConfig {
        let _span = tracing::debug_span!("resolve", %environment).entered();

        let base = self.base.clone();
        let config = match environment {
            Environment::Production => production(base),
            Environment::Development => development(base, &self.manifest),
        };

        tracing::debug!(
            rules = config.rules.len(),
            plugins = config.plugins.len(),
            externals = config.external_modules.as_ref().map_or(0, IndexSet::len),
            "resolved build config"
        );
        config
    }

    /// Resolve from a raw flag; anything but `"production"` is development
    pub fn resolve_flag(&self, flag: Option<&str>) -> BuildConfig {
        self.resolve(Environment::from_flag(flag))
    }
}

/// Constants injected into production builds
pub fn production_defines() -> IndexMap<String, Value> {
    IndexMap::from([
        ("PRODUCTION".to_string(), json!(true)),
        ("NODE_ENV".to_string(), json!("production")),
    ])
}

fn production(config: BuildConfig) -> BuildConfig {
    let rules = config
        .rules
        .into_iter()
        .map(|rule| {
            if rule.loader == COMPONENT_LOADER {
                rule.with_css_extraction()
            } else {
                rule
            }
        })
        .collect();

    let defines = production_defines();
    let mut plugins = config.plugins;
    plugins.push(PluginInvocation::Minify);
    plugins.push(PluginInvocation::Define {
        namespace: DEFINE_NAMESPACE.to_string(),
        definitions: defines.clone(),
    });

    BuildConfig {
        mode: Environment::Production,
        rules,
        plugins,
        environment_defines: defines,
        ..config
    }
}

fn development(config: BuildConfig, manifest: &DependencyManifest) -> BuildConfig {
    let mut output = config.output;
    output.library_target = Some(LibraryTarget::CommonJs2);

    let mut resolve = config.resolve;
    resolve.modules = vec![config.context.join("node_modules")];

    let externals: IndexSet<String> = manifest.dependency_names().map(str::to_string).collect();

    BuildConfig {
        mode: Environment::Development,
        devtool: Some(Devtool::EvalSourceMap),
        output,
        resolve,
        external_modules: Some(externals),
        ..config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ConfigResolver {
        let manifest = DependencyManifest::default()
            .with_dependency("vue", "2.5.0")
            .with_dependency("axios", "0.18.0");
        ConfigResolver::with_manifest("/app", manifest).unwrap()
    }

    #[test]
    fn production_leaves_base_untouched() {
        let resolver = resolver();
        let before = resolver.base().clone();
        let _ = resolver.resolve(Environment::Production);
        assert_eq!(resolver.base(), &before);
        assert!(resolver.base().rules.iter().all(|rule| !rule.extracts_css()));
    }

    #[test]
    fn development_sets_search_path_and_interop() {
        let config = resolver().resolve(Environment::Development);
        assert_eq!(
            config.resolve.modules,
            vec![std::path::PathBuf::from("/app/node_modules")]
        );
        assert_eq!(config.output.library_target, Some(LibraryTarget::CommonJs2));
        assert!(config.environment_defines.is_empty());
    }

    #[test]
    fn production_keeps_dev_only_fields_unset() {
        let config = resolver().resolve(Environment::Production);
        assert!(config.devtool.is_none());
        assert!(config.output.library_target.is_none());
        assert!(config.resolve.modules.is_empty());
        assert!(config.external_modules.is_none());
    }

    #[test]
    fn production_appends_plugins_in_order() {
        let config = resolver().resolve(Environment::Production);
        assert_eq!(
            config.plugin_names(),
            vec!["extract-css", "html-scaffold", "minify", "define"]
        );
    }
}
