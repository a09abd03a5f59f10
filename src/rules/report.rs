// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Evaluation results.

use console::{style, Style};
use serde::Serialize;
use std::fmt;

use super::level::Severity;
use super::name::RuleName;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Rule that was violated.
    pub rule: RuleName,
    /// Severity configured for the rule.
    pub severity: Severity,
    /// Human-readable message, ending with the rule name in brackets.
    pub message: String,
}

impl Finding {
    /// Format the finding for terminal output.
    pub fn format(&self) -> String {
        let (prefix, message_style) = match self.severity {
            Severity::Error => (style("✖").red().bold(), Style::new().red()),
            Severity::Warning => (style("⚠").yellow().bold(), Style::new().yellow()),
        };

        format!("{}   {}", prefix, message_style.apply_to(&self.message))
    }
}

/// Aggregate outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Valid,
    Warning,
    Error,
}

impl Verdict {
    /// Derive the verdict from a set of findings.
    pub fn from_findings(findings: &[Finding]) -> Self {
        findings
            .iter()
            .map(|f| match f.severity {
                Severity::Warning => Verdict::Warning,
                Severity::Error => Verdict::Error,
            })
            .max()
            .unwrap_or(Verdict::Valid)
    }

    /// Process exit code for a lint command: nonzero only when an error is present.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Valid | Verdict::Warning => 0,
            Verdict::Error => 1,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Warning => write!(f, "warning"),
            Verdict::Error => write!(f, "error"),
        }
    }
}

/// Output format for rendering a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Findings of one evaluation and their verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    findings: Vec<Finding>,
    verdict: Verdict,
}

impl Report {
    /// Create a report, deriving the verdict from the findings.
    pub fn new(findings: Vec<Finding>) -> Self {
        let verdict = Verdict::from_findings(&findings);
        Self { findings, verdict }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Split into findings and verdict.
    pub fn into_parts(self) -> (Vec<Finding>, Verdict) {
        (self.findings, self.verdict)
    }

    /// Check if the evaluation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.verdict != Verdict::Error
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// Whether a finding exists for the given rule.
    pub fn has_finding(&self, rule: &str) -> bool {
        self.findings.iter().any(|f| f.rule.to_string() == rule)
    }

    /// Render the report.
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.render_text(),
            ReportFormat::Json => self.render_json(),
        }
    }

    fn render_text(&self) -> String {
        let mut lines: Vec<String> = self.findings.iter().map(Finding::format).collect();
        lines.push(String::new());
        lines.push(self.summary());
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "verdict": self.verdict,
            "errorCount": self.errors().count(),
            "warningCount": self.warnings().count(),
            "findings": self.findings,
        });

        serde_json::to_string_pretty(&json).expect("report serializes to JSON")
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let errors = self.errors().count();
        let warnings = self.warnings().count();

        match self.verdict {
            Verdict::Valid => "Valid".to_string(),
            Verdict::Warning => format!("Valid ({} warnings)", warnings),
            Verdict::Error => format!("Invalid ({} errors, {} warnings)", errors, warnings),
        }
    }
}
