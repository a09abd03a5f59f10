// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Compiled rule table.

use crate::config::{LintConfig, RuleSpec};
use crate::error::{ConfigError, LintError, Result};
use regex::Regex;
use std::collections::BTreeMap;

use super::level::Level;
use super::name::{Check, RuleName};

/// The constraint a compiled rule enforces.
#[derive(Debug, Clone)]
pub enum Constraint {
    Presence,
    Format(Regex),
    MaxLength(usize),
    Enum(Vec<String>),
}

/// A rule ready for evaluation.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub level: Level,
    pub constraint: Constraint,
    /// Whether an absent field satisfies the rule.
    pub optional: bool,
}

/// Immutable mapping from rule name to compiled rule.
///
/// Iteration follows [`RuleName`] ordering, so findings come out in the same
/// order for every evaluation.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: BTreeMap<RuleName, CompiledRule>,
}

impl RuleTable {
    /// Compile the rules of an already resolved document.
    pub fn compile(config: &LintConfig) -> Result<Self> {
        let mut rules = BTreeMap::new();

        for (name, spec) in &config.rules {
            let rule_name = name.parse::<RuleName>().map_err(|_| {
                LintError::Config(ConfigError::UnknownRule { rule: name.clone() })
            })?;
            let compiled = compile_rule(name, rule_name.check, spec)?;
            rules.insert(rule_name, compiled);
        }

        tracing::debug!("Compiled rule table with {} rules", rules.len());

        Ok(Self { rules })
    }

    /// Look up a rule.
    pub fn get(&self, name: &RuleName) -> Option<&CompiledRule> {
        self.rules.get(name)
    }

    /// Iterate over rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleName, &CompiledRule)> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn compile_rule(name: &str, check: Check, spec: &RuleSpec) -> Result<CompiledRule> {
    let level = spec.level.to_level().ok_or_else(|| {
        LintError::Config(ConfigError::InvalidLevel {
            rule: name.to_string(),
            value: spec.level.to_string(),
        })
    })?;

    let missing = |field: &str| {
        LintError::Config(ConfigError::MissingField {
            rule: name.to_string(),
            field: field.to_string(),
        })
    };

    // Required fields are checked even for disabled rules
    let constraint = match check {
        Check::Empty => Constraint::Presence,
        Check::Format => {
            let pattern = spec.format.as_deref().ok_or_else(|| missing("format"))?;
            let regex = Regex::new(pattern).map_err(|e| {
                LintError::Config(ConfigError::InvalidPattern {
                    rule: name.to_string(),
                    message: e.to_string(),
                })
            })?;
            Constraint::Format(regex)
        }
        Check::MaxLength => Constraint::MaxLength(spec.length.ok_or_else(|| missing("length"))?),
        Check::Enum => Constraint::Enum(spec.options.clone().ok_or_else(|| missing("options"))?),
    };

    Ok(CompiledRule {
        level,
        constraint,
        optional: spec.optional,
    })
}
