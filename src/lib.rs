// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cklint - Rule evaluator for conventional commit messages
//!
//! Compiles a commitlint-style lint document into an immutable rule table
//! and evaluates structured commit records against it.
//!
//! # Features
//!
//! - **Lint Documents**: `extends`, `parserPreset` and `rules` in TOML or JSON
//! - **Presets**: Built-in conventional baseline with per-rule overrides
//! - **Rule Engine**: Presence, format, length and enumeration checks per field
//! - **Reports**: Findings with severities, an aggregate verdict, text and JSON output
//!
//! # Example
//!
//! ```
//! use cklint::commit::CommitRecord;
//! use cklint::config::LintConfig;
//! use cklint::rules::{Linter, Verdict};
//!
//! let config = LintConfig::from_toml(r#"
//! extends = ["config-conventional"]
//!
//! [rules.description-max-length]
//! level = "error"
//! length = 72
//! "#).unwrap();
//! let linter = Linter::from_config(config).unwrap();
//!
//! let report = linter.evaluate(&CommitRecord::new("Feat", "add x"));
//! assert_eq!(report.verdict(), Verdict::Error);
//! ```

// Module declarations
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use commit::CommitRecord;
pub use config::LintConfig;
pub use error::{LintError, Result};
pub use rules::{evaluate, Finding, Linter, Report, RuleTable, Verdict};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cklint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
