//! Tests for loading a resolver from a project directory.

use std::fs;
use std::path::Path;

use shellpack_config::{
    ConfigError, ConfigResolver, ConfigValidator, Environment, FsValidator,
};
use tempfile::TempDir;

fn write_project(root: &Path, package_json: &str) {
    let renderer = root.join("src/renderer");
    fs::create_dir_all(renderer.join("components")).expect("create dirs");
    fs::write(renderer.join("main.js"), "import Vue from 'vue';\n").expect("write entry");
    fs::write(renderer.join("index.ejs"), "<div id=\"app\"></div>\n").expect("write template");
    fs::write(root.join("package.json"), package_json).expect("write manifest");
}

#[test]
fn for_project_reads_manifest() {
    let dir = TempDir::new().expect("tempdir");
    write_project(
        dir.path(),
        r#"{ "name": "shell", "dependencies": { "electron-store": "1.3.0" } }"#,
    );

    let resolver = ConfigResolver::for_project(dir.path()).expect("resolver");
    let config = resolver.resolve(Environment::Development);

    assert!(config.is_external("electron-store"));
    assert_eq!(config.context, dir.path());
    assert_eq!(
        config.entry_points["renderer"],
        vec![dir.path().join("src/renderer/main.js")]
    );
}

#[test]
fn for_project_fails_without_dependencies() {
    let dir = TempDir::new().expect("tempdir");
    write_project(dir.path(), r#"{ "name": "shell", "devDependencies": {} }"#);

    let err = ConfigResolver::for_project(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingField { ref field } if field == "dependencies"));
}

#[test]
fn resolved_configs_pass_filesystem_validation() {
    let dir = TempDir::new().expect("tempdir");
    write_project(dir.path(), r#"{ "dependencies": { "vue": "2.5.0" } }"#);

    let resolver = ConfigResolver::for_project(dir.path()).expect("resolver");
    let validator = FsValidator::new(dir.path());
    for environment in [Environment::Development, Environment::Production] {
        validator
            .validate(&resolver.resolve(environment))
            .expect("valid config");
    }
}
