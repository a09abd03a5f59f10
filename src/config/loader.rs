// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Document parsing and preset resolution.

use crate::error::{ConfigError, LintError, Result};

use super::default::preset;
use super::schema::{DocumentFormat, LintConfig};

/// Parse a lint document from a string.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<LintConfig> {
    tracing::debug!("Parsing {:?} lint document ({} bytes)", format, content.len());

    match format {
        DocumentFormat::Toml => toml::from_str(content).map_err(|e| {
            LintError::Config(ConfigError::ParseError {
                message: format!("Failed to parse TOML: {}", e),
            })
        }),
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| {
            LintError::Config(ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
            })
        }),
    }
}

/// Flatten `extends` into a single document.
///
/// Presets apply in order; later presets and then the document's own rules
/// replace earlier specs of the same name. The returned document keeps the
/// original `extends` list for reference.
pub fn resolve_config(config: LintConfig) -> Result<LintConfig> {
    let extends = config.extends.clone();
    let mut resolved = LintConfig::default();

    for name in &config.extends {
        let base = preset(name).ok_or_else(|| {
            LintError::Config(ConfigError::UnknownPreset {
                preset: name.clone(),
            })
        })?;
        tracing::debug!("Applying preset '{}' ({} rules)", name, base.rules.len());
        resolved = merge_configs(resolved, base);
    }

    let mut merged = merge_configs(resolved, config);
    merged.extends = extends;
    Ok(merged)
}

/// Merge two documents, with the overlay taking precedence.
pub fn merge_configs(base: LintConfig, overlay: LintConfig) -> LintConfig {
    let mut rules = base.rules;
    rules.extend(overlay.rules);

    LintConfig {
        extends: overlay.extends,
        parser_preset: overlay.parser_preset.or(base.parser_preset),
        rules,
    }
}
