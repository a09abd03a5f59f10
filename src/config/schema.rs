// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint document schema.
//!
//! Mirrors the `extends` / `parserPreset` / `rules` layout of a commitlint
//! configuration. Values are kept as written; validation happens when the
//! document is compiled into a rule table.

use crate::rules::Level;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The lint document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LintConfig {
    /// Base presets, applied in order before `rules`.
    pub extends: Vec<String>,

    /// Identifier of the commit-message grammar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_preset: Option<String>,

    /// Rule overrides keyed by rule name.
    pub rules: BTreeMap<String, RuleSpec>,
}

impl LintConfig {
    /// Parse a document in the given format.
    pub fn parse(content: &str, format: DocumentFormat) -> crate::error::Result<Self> {
        super::loader::parse_document(content, format)
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> crate::error::Result<Self> {
        Self::parse(content, DocumentFormat::Toml)
    }

    /// Parse a JSON document (`.commitlintrc.json`).
    pub fn from_json(content: &str) -> crate::error::Result<Self> {
        Self::parse(content, DocumentFormat::Json)
    }

    /// Set a rule, replacing any previous spec of the same name.
    pub fn with_rule(mut self, name: impl Into<String>, spec: RuleSpec) -> Self {
        self.rules.insert(name.into(), spec);
        self
    }
}

/// Serialization format of a lint document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

/// Configuration of a single rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    /// Rule level, by name or numeric code.
    pub level: LevelValue,

    /// Allowed values for enumeration rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Regex for format rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Limit for max-length rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    /// Whether an absent field passes.
    #[serde(default)]
    pub optional: bool,
}

impl RuleSpec {
    /// Create a spec with only a level.
    pub fn new(level: Level) -> Self {
        Self {
            level: level.into(),
            options: None,
            format: None,
            length: None,
            optional: false,
        }
    }

    /// Set the allowed options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Set the format pattern.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the length limit.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Mark the field as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A level as written in the document: `"error"` or `2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelValue {
    Name(String),
    Code(i64),
}

impl LevelValue {
    /// Resolve to a level, if the value is a known one.
    pub fn to_level(&self) -> Option<Level> {
        match self {
            LevelValue::Name(name) => name.parse().ok(),
            LevelValue::Code(code) => Level::from_code(*code),
        }
    }
}

impl From<Level> for LevelValue {
    fn from(level: Level) -> Self {
        LevelValue::Name(level.as_str().to_string())
    }
}

impl fmt::Display for LevelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelValue::Name(name) => write!(f, "'{}'", name),
            LevelValue::Code(code) => write!(f, "{}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_value_resolution() {
        assert_eq!(
            LevelValue::Name("warn".to_string()).to_level(),
            Some(Level::Warning)
        );
        assert_eq!(LevelValue::Code(2).to_level(), Some(Level::Error));
        assert_eq!(LevelValue::Name("loud".to_string()).to_level(), None);
        assert_eq!(LevelValue::Code(-1).to_level(), None);
    }

    #[test]
    fn test_rule_spec_builder() {
        let spec = RuleSpec::new(Level::Error)
            .with_options(["core", "cli"])
            .optional();
        assert_eq!(spec.level, LevelValue::Name("error".to_string()));
        assert_eq!(spec.options, Some(vec!["core".to_string(), "cli".to_string()]));
        assert!(spec.optional);
        assert!(spec.length.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = LintConfig::default()
            .with_rule("body-empty", RuleSpec::new(Level::Warning))
            .with_rule(
                "description-max-length",
                RuleSpec::new(Level::Error).with_length(72),
            );
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("description-max-length"));
        assert!(toml_str.contains("length = 72"));

        let back: LintConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }
}
