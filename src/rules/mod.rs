// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! A lint document compiles into an immutable [`RuleTable`]; evaluating a
//! [`CommitRecord`](crate::commit::CommitRecord) against it yields a
//! [`Report`] of findings and a verdict.

mod builtin;
mod engine;
mod level;
mod name;
mod report;
mod table;

pub use builtin::check_rule;
pub use engine::{evaluate, Linter};
pub use level::{Level, Severity};
pub use name::{Check, Field, RuleName};
pub use report::{Finding, Report, ReportFormat, Verdict};
pub use table::{CompiledRule, Constraint, RuleTable};
