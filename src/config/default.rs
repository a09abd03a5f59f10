// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in presets and the default lint document.

use crate::rules::Level;

use super::schema::{LevelValue, LintConfig, RuleSpec};

/// Preset identifier for the conventional baseline.
pub const CONVENTIONAL_PRESET: &str = "config-conventional";

/// Parser preset used by the default document.
pub const CONVENTIONAL_PARSER: &str = "conventional-changelog-conventionalcommits";

/// Commit types accepted by the conventional baseline.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Scopes accepted by the default document.
pub const DEFAULT_SCOPES: &[&str] = &["core", "cli", "config", "rules", "deps", "docs", "ci"];

/// Look up a built-in preset by the identifier used in `extends`.
pub fn preset(name: &str) -> Option<LintConfig> {
    match name {
        CONVENTIONAL_PRESET | "@commitlint/config-conventional" => Some(conventional_preset()),
        _ => None,
    }
}

/// The conventional baseline: a lowercase type from the known set and a subject.
fn conventional_preset() -> LintConfig {
    LintConfig::default()
        .with_rule("type-empty", RuleSpec::new(Level::Error))
        .with_rule(
            "type-format",
            RuleSpec::new(Level::Error).with_format("^[a-z].*$"),
        )
        .with_rule(
            "type",
            RuleSpec::new(Level::Error).with_options(CONVENTIONAL_TYPES.iter().copied()),
        )
        .with_rule("subject-empty", RuleSpec::new(Level::Error))
}

/// Get the default lint document.
pub fn default_config() -> LintConfig {
    let config = LintConfig {
        extends: vec!["@commitlint/config-conventional".to_string()],
        parser_preset: Some(CONVENTIONAL_PARSER.to_string()),
        ..LintConfig::default()
    };

    config
        .with_rule(
            "type-max-length",
            RuleSpec::new(Level::Error).with_length(20),
        )
        .with_rule(
            "scope",
            RuleSpec::new(Level::Error)
                .with_options(DEFAULT_SCOPES.iter().copied())
                .optional(),
        )
        .with_rule("description-empty", RuleSpec::new(Level::Error))
        .with_rule(
            "description-format",
            RuleSpec::new(Level::Error).with_format("^[a-z].*$"),
        )
        .with_rule(
            "description-max-length",
            RuleSpec::new(Level::Error).with_length(72),
        )
        .with_rule("body-empty", RuleSpec::new(Level::Warning))
        .with_rule(
            "footers-empty",
            RuleSpec {
                level: LevelValue::Name("ignore".to_string()),
                ..RuleSpec::new(Level::Disabled)
            },
        )
}

/// Generate an example document equivalent to [`default_config`].
pub fn example_config() -> &'static str {
    r#"# cklint document
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

extends = ["@commitlint/config-conventional"]
parserPreset = "conventional-changelog-conventionalcommits"

[rules.type-max-length]
level = "error"
length = 20

[rules.scope]
level = "error"
options = ["core", "cli", "config", "rules", "deps", "docs", "ci"]
optional = true

[rules.description-empty]
level = "error"

[rules.description-format]
level = "error"
format = "^[a-z].*$"

[rules.description-max-length]
level = "error"
length = 72

# Bodies are encouraged, not required.
[rules.body-empty]
level = "warning"

[rules.footers-empty]
level = "ignore"
"#
}
