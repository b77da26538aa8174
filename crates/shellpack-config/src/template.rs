//! Base template for the renderer bundle.
//!
//! The template is identical for every environment. Environment overlays are
//! applied by [`crate::ConfigResolver`] on a copy.

use std::path::Path;

use indexmap::IndexMap;

use crate::build::{
    BuildConfig, OutputOptions, PluginInvocation, ResolveOptions, RuleKind, TransformRule,
};
use crate::environment::Environment;
use crate::error::Result;

pub const TARGET: &str = "electron-renderer";
pub const ENTRY_NAME: &str = "renderer";
pub const OUTPUT_DIR: &str = "dist";
pub const OUTPUT_FILENAME: &str = "[name].js";
pub const STYLESHEET_FILENAME: &str = "styles.css";
pub const HTML_FILENAME: &str = "index.html";

/// Loader whose rule gains CSS extraction in production
pub const COMPONENT_LOADER: &str = "vue-loader";

/// Build the base renderer config rooted at `project_root`.
///
/// Paths are computed, never read.
pub fn renderer(project_root: impl AsRef<Path>) -> Result<BuildConfig> {
    let root = project_root.as_ref();

    let mut entry_points = IndexMap::new();
    entry_points.insert(
        ENTRY_NAME.to_string(),
        vec![root.join("src/renderer/main.js")],
    );

    Ok(BuildConfig {
        mode: Environment::Development,
        context: root.to_path_buf(),
        target: TARGET.to_string(),
        performance_hints: false,
        entry_points,
        output: OutputOptions {
            path: root.join(OUTPUT_DIR),
            filename: OUTPUT_FILENAME.to_string(),
            library_target: None,
        },
        rules: rules()?,
        plugins: vec![
            PluginInvocation::ExtractCss {
                filename: STYLESHEET_FILENAME.to_string(),
            },
            PluginInvocation::HtmlScaffold {
                filename: HTML_FILENAME.to_string(),
                template: root.join("src/renderer/index.ejs"),
            },
        ],
        resolve: ResolveOptions {
            aliases: aliases(root),
            modules: Vec::new(),
        },
        devtool: None,
        external_modules: None,
        environment_defines: IndexMap::new(),
    })
}

fn rules() -> Result<Vec<TransformRule>> {
    Ok(vec![
        TransformRule::new(RuleKind::Stylesheet, r"\.css$", "css-loader")?
            .with_fallback_loader("style-loader"),
        TransformRule::new(RuleKind::Template, r"\.html$", "vue-html-loader")?,
        TransformRule::new(RuleKind::Script, r"\.js$", "babel-loader")?
            .with_exclude("node_modules")?,
        TransformRule::new(RuleKind::StructuredData, r"\.json$", "json-loader")?,
        TransformRule::new(RuleKind::Component, r"\.vue$", COMPONENT_LOADER)?,
        TransformRule::new(RuleKind::Image, r"\.(png|jpe?g|gif|svg)(\?.*)?$", "file-loader")?
            .with_asset_name("imgs/[name].[ext]"),
        TransformRule::new(RuleKind::Font, r"\.(woff2?|eot|ttf|otf)(\?.*)?$", "file-loader")?
            .with_asset_name("fonts/[name].[ext]"),
    ])
}

fn aliases(root: &Path) -> IndexMap<String, std::path::PathBuf> {
    [
        ("assets", "assets/"),
        ("@", "src/renderer/"),
        ("util", "src/renderer/util/"),
        ("page", "src/renderer/page/"),
        ("compo", "src/renderer/components/"),
    ]
    .into_iter()
    .map(|(alias, dir)| (alias.to_string(), root.join(dir)))
    .collect()
}
