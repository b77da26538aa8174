use std::fmt;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// Compiled request-path pattern
///
/// Serialized as its source string. Two patterns are equal when their sources
/// are equal.
#[derive(Clone)]
pub struct RulePattern(Regex);

impl RulePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, request: &str) -> bool {
        self.0.is_match(request)
    }
}

impl fmt::Debug for RulePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl PartialEq for RulePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RulePattern {}

impl Serialize for RulePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RulePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        RulePattern::new(&pattern).map_err(serde::de::Error::custom)
    }
}

/// Category of files a rule handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    Stylesheet,
    Template,
    Script,
    StructuredData,
    Component,
    /// Binary asset emitted under an image directory
    Image,
    /// Binary asset emitted under a font directory
    Font,
}

impl RuleKind {
    pub fn is_binary_asset(&self) -> bool {
        matches!(self, RuleKind::Image | RuleKind::Font)
    }
}

/// Loader options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOptions {
    /// Pull component styles out into the extracted stylesheet
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub extract_css: bool,

    /// Emitted file name pattern for binary assets (e.g. `imgs/[name].[ext]`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
}

/// Pattern-to-loader mapping applied to matching requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRule {
    pub kind: RuleKind,

    pub test: RulePattern,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<RulePattern>,

    pub loader: String,

    /// Loader used when the output cannot be extracted (stylesheets only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_loader: Option<String>,

    #[serde(default)]
    pub options: RuleOptions,
}

impl TransformRule {
    /// # Example
    ///
    /// ```
    /// use shellpack_config::{RuleKind, TransformRule};
    ///
    /// let rule = TransformRule::new(RuleKind::Script, r"\.js$", "babel-loader")
    ///     .unwrap()
    ///     .with_exclude("node_modules")
    ///     .unwrap();
    ///
    /// assert!(rule.applies_to("src/renderer/main.js"));
    /// assert!(!rule.applies_to("node_modules/vue/dist/vue.js"));
    /// ```
    pub fn new(kind: RuleKind, test: &str, loader: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind,
            test: RulePattern::new(test)?,
            exclude: None,
            loader: loader.into(),
            fallback_loader: None,
            options: RuleOptions::default(),
        })
    }

    pub fn with_exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude = Some(RulePattern::new(pattern)?);
        Ok(self)
    }

    pub fn with_fallback_loader(mut self, loader: impl Into<String>) -> Self {
        self.fallback_loader = Some(loader.into());
        self
    }

    pub fn with_asset_name(mut self, name: impl Into<String>) -> Self {
        self.options.asset_name = Some(name.into());
        self
    }

    /// Copy of this rule with CSS extraction enabled
    pub fn with_css_extraction(mut self) -> Self {
        self.options.extract_css = true;
        self
    }

    /// `test` matches and `exclude` does not
    pub fn applies_to(&self, request: &str) -> bool {
        self.test.is_match(request)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(request))
    }

    pub fn extracts_css(&self) -> bool {
        self.options.extract_css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = RulePattern::new(r"\.(png").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPattern { ref pattern, .. } if pattern == r"\.(png"
        ));
    }

    #[test]
    fn pattern_equality_uses_source() {
        assert_eq!(
            RulePattern::new(r"\.css$").unwrap(),
            RulePattern::new(r"\.css$").unwrap()
        );
        assert_ne!(
            RulePattern::new(r"\.css$").unwrap(),
            RulePattern::new(r"\.scss$").unwrap()
        );
    }

    #[test]
    fn asset_pattern_accepts_query_suffix() {
        let pattern = r"\.(png|jpe?g|gif|svg)(\?.*)?$";
        let rule = TransformRule::new(RuleKind::Image, pattern, "file-loader").unwrap();
        assert!(rule.applies_to("assets/logo.png"));
        assert!(rule.applies_to("assets/logo.svg?v=3"));
        assert!(rule.applies_to("assets/photo.jpeg"));
        assert!(!rule.applies_to("assets/logo.png.map"));
    }

    #[test]
    fn css_extraction_returns_modified_copy() {
        let rule = TransformRule::new(RuleKind::Component, r"\.vue$", "vue-loader").unwrap();
        let extracted = rule.clone().with_css_extraction();
        assert!(!rule.extracts_css());
        assert!(extracted.extracts_css());
    }

    #[test]
    fn serializes_pattern_as_string() {
        let rule = TransformRule::new(RuleKind::StructuredData, r"\.json$", "json-loader").unwrap();
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["test"], serde_json::json!(r"\.json$"));
        assert_eq!(value["kind"], serde_json::json!("structured-data"));
        assert!(value.get("exclude").is_none());
        assert!(value["options"].get("extractCss").is_none());
    }

    #[test]
    fn deserialize_rejects_bad_pattern() {
        let value = serde_json::json!({
            "kind": "script",
            "test": "(",
            "loader": "babel-loader"
        });
        let result: std::result::Result<TransformRule, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }
}
