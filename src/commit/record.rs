// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Structured commit record.
//!
//! The record is produced by an external parser for the grammar named in the
//! lint document's `parserPreset`. cklint never parses raw commit text.

use crate::error::{LintError, RecordError, Result};
use serde::{Deserialize, Serialize};

/// A commit message decomposed into its conventional parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitRecord {
    /// Commit type (feat, fix, etc.).
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line text after the `type(scope): ` prefix.
    pub subject: String,
    /// Optional body.
    pub body: Option<String>,
    /// Footer lines (trailers, references, breaking-change notes).
    pub footers: Vec<String>,
}

impl CommitRecord {
    /// Create a new record with a type and subject.
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a footer line.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footers.push(footer.into());
        self
    }

    /// Decode a record from the JSON an external parser emits.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            LintError::Record(RecordError::ParseFailed {
                message: e.to_string(),
            })
        })
    }

    /// The description, which is the subject text.
    pub fn description(&self) -> &str {
        &self.subject
    }

    /// Get the reconstructed header line.
    pub fn header(&self) -> String {
        let mut result = String::new();
        result.push_str(&self.commit_type);

        if let Some(ref scope) = self.scope {
            if !scope.is_empty() {
                result.push('(');
                result.push_str(scope);
                result.push(')');
            }
        }

        result.push_str(": ");
        result.push_str(&self.subject);

        result
    }
}
