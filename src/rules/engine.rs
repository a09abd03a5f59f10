// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitRecord;
use crate::config::{resolve_config, LintConfig};
use crate::error::Result;

use super::builtin::check_rule;
use super::report::Report;
use super::table::RuleTable;

/// Evaluate every rule in the table against a record.
///
/// Rules are independent and all findings are collected.
pub fn evaluate(record: &CommitRecord, rules: &RuleTable) -> Report {
    let mut findings = Vec::new();

    for (name, rule) in rules.iter() {
        tracing::trace!("Evaluating rule {} at level {}", name, rule.level);
        if let Some(finding) = check_rule(name, rule, record) {
            findings.push(finding);
        }
    }

    let report = Report::new(findings);
    tracing::debug!(
        "Evaluated '{}': {} ({} findings)",
        record.header(),
        report.verdict(),
        report.findings().len()
    );
    report
}

/// A compiled lint document.
#[derive(Debug, Clone)]
pub struct Linter {
    table: RuleTable,
    parser_preset: Option<String>,
    extends: Vec<String>,
}

impl Linter {
    /// Create a linter from an already compiled table.
    pub fn new(table: RuleTable) -> Self {
        Self {
            table,
            parser_preset: None,
            extends: Vec::new(),
        }
    }

    /// Resolve presets and compile a document.
    pub fn from_config(config: LintConfig) -> Result<Self> {
        let resolved = resolve_config(config)?;
        let table = RuleTable::compile(&resolved)?;

        Ok(Self {
            table,
            parser_preset: resolved.parser_preset,
            extends: resolved.extends,
        })
    }

    /// Build a linter from the default document.
    pub fn with_defaults() -> Result<Self> {
        Self::from_config(crate::config::default_config())
    }

    /// Validate a commit record.
    pub fn evaluate(&self, record: &CommitRecord) -> Report {
        evaluate(record, &self.table)
    }

    /// Validate a batch of independent records.
    pub fn evaluate_all(&self, records: &[CommitRecord]) -> Vec<Report> {
        records.iter().map(|r| self.evaluate(r)).collect()
    }

    /// Validate a record decoded from the JSON an external parser emits.
    pub fn evaluate_json(&self, json: &str) -> Result<Report> {
        let record = CommitRecord::from_json(json)?;
        Ok(self.evaluate(&record))
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Grammar the records are expected to be parsed with.
    pub fn parser_preset(&self) -> Option<&str> {
        self.parser_preset.as_deref()
    }

    pub fn extends(&self) -> &[String] {
        &self.extends
    }
}
