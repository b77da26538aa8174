//! Dependency manifest (`package.json`).
//!
//! Only the `dependencies` table is consumed: its keys become the externalized
//! modules of a development build. The manifest is validated on load, so a
//! malformed manifest aborts the build before any config is resolved.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ConfigError, Result};

pub const MANIFEST_FILE: &str = "package.json";

/// Runtime dependencies declared by the application, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyManifest {
    pub name: Option<String>,
    pub dependencies: IndexMap<String, String>,
}

impl DependencyManifest {
    /// Build a manifest from parsed JSON.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingField`] if `dependencies` is absent or null
    /// - [`ConfigError::InvalidValue`] if `dependencies` is not an object of strings
    ///
    /// # Example
    ///
    /// ```
    /// use shellpack_config::DependencyManifest;
    /// use serde_json::json;
    ///
    /// let manifest = DependencyManifest::from_value(json!({
    ///     "dependencies": { "vue": "2.5.0", "axios": "0.18.0" }
    /// }))
    /// .unwrap();
    ///
    /// let names: Vec<_> = manifest.dependency_names().collect();
    /// assert_eq!(names, vec!["vue", "axios"]);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(ConfigError::invalid_value(
                MANIFEST_FILE,
                "expected a JSON object at the top level",
            ));
        };

        let name = match root.remove("name") {
            Some(Value::String(name)) => Some(name),
            _ => None,
        };

        let dependencies = match root.remove("dependencies") {
            None | Some(Value::Null) => {
                return Err(ConfigError::MissingField {
                    field: "dependencies".to_string(),
                });
            }
            Some(Value::Object(map)) => map
                .into_iter()
                .map(|(dep, version)| match version {
                    Value::String(version) => Ok((dep, version)),
                    other => Err(ConfigError::invalid_value(
                        format!("dependencies.{dep}"),
                        format!("expected a version string, found {other}"),
                    )),
                })
                .collect::<Result<IndexMap<_, _>>>()?,
            Some(other) => {
                return Err(ConfigError::invalid_value(
                    "dependencies",
                    format!("expected an object, found {other}"),
                ));
            }
        };

        Ok(Self { name, dependencies })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| ConfigError::invalid_value(MANIFEST_FILE, format!("Invalid JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Read and validate a manifest file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let manifest = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            dependencies = manifest.dependencies.len(),
            "loaded dependency manifest"
        );
        Ok(manifest)
    }

    /// Load `package.json` from a project root
    pub fn load(project_root: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(project_root.as_ref().join(MANIFEST_FILE))
    }

    pub fn with_dependency(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), version.into());
        self
    }

    /// Dependency names in manifest order
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_dependencies_is_a_fault() {
        let err = DependencyManifest::from_value(json!({ "name": "app" })).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { ref field } if field == "dependencies"));
    }

    #[test]
    fn null_dependencies_is_a_fault() {
        let err = DependencyManifest::from_value(json!({ "dependencies": null })).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { .. }));
    }

    #[test]
    fn empty_dependencies_is_allowed() {
        let manifest = DependencyManifest::from_value(json!({ "dependencies": {} })).unwrap();
        assert_eq!(manifest.dependency_names().count(), 0);
    }

    #[test]
    fn rejects_non_object_dependencies() {
        let err = DependencyManifest::from_value(json!({ "dependencies": ["vue"] })).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "dependencies"
        ));
    }

    #[test]
    fn rejects_non_string_version() {
        let err =
            DependencyManifest::from_value(json!({ "dependencies": { "vue": 2 } })).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "dependencies.vue"
        ));
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(DependencyManifest::from_value(json!([])).is_err());
    }

    #[test]
    fn load_reads_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{
                "name": "desktop-shell",
                "dependencies": { "vue": "2.5.0", "axios": "0.18.0" },
                "devDependencies": { "webpack": "4.0.0" }
            }"#,
        )
        .unwrap();

        let manifest = DependencyManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("desktop-shell"));
        assert_eq!(manifest.dependencies.len(), 2);
        assert_eq!(manifest.dependencies["axios"], "0.18.0");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = DependencyManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = DependencyManifest::from_json_str("{ not json").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "package.json"
        ));
    }
}
