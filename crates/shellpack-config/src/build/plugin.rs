use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bundler plugin and its arguments. Position in the plugin list is the
/// execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginInvocation {
    /// Collect stylesheets into a single emitted file
    ExtractCss { filename: String },

    /// Emit an HTML page that loads the bundle
    HtmlScaffold { filename: String, template: PathBuf },

    /// Minify emitted scripts
    Minify,

    /// Inject build-time constants under `namespace`
    Define {
        namespace: String,
        definitions: IndexMap<String, Value>,
    },
}

impl PluginInvocation {
    pub fn name(&self) -> &'static str {
        match self {
            PluginInvocation::ExtractCss { .. } => "extract-css",
            PluginInvocation::HtmlScaffold { .. } => "html-scaffold",
            PluginInvocation::Minify => "minify",
            PluginInvocation::Define { .. } => "define",
        }
    }

    /// Output file written by the plugin, if any
    pub fn emitted_file(&self) -> Option<&str> {
        match self {
            PluginInvocation::ExtractCss { filename }
            | PluginInvocation::HtmlScaffold { filename, .. } => Some(filename.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_plugin_tag() {
        let value = serde_json::to_value(PluginInvocation::Minify).unwrap();
        assert_eq!(value, json!({ "plugin": "minify" }));

        let value = serde_json::to_value(PluginInvocation::ExtractCss {
            filename: "styles.css".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({ "plugin": "extract-css", "filename": "styles.css" }));
    }

    #[test]
    fn emitted_file_only_for_emitting_plugins() {
        let html = PluginInvocation::HtmlScaffold {
            filename: "index.html".to_string(),
            template: PathBuf::from("src/renderer/index.ejs"),
        };
        assert_eq!(html.emitted_file(), Some("index.html"));
        assert_eq!(PluginInvocation::Minify.emitted_file(), None);
    }
}
