// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule checks.

use crate::commit::CommitRecord;

use super::level::Severity;
use super::name::{Field, RuleName};
use super::report::Finding;
use super::table::{CompiledRule, Constraint};

/// Values of a field, or `None` when the field is absent.
///
/// Type and subject are absent when blank; scope and body only when unset or
/// empty. Footers are absent when every entry is blank, otherwise all entries
/// are returned so per-entry checks see blank lines too.
fn field_values<'a>(record: &'a CommitRecord, field: Field) -> Option<Vec<&'a str>> {
    let value = match field {
        Field::Type => Some(record.commit_type.as_str()).filter(|v| !v.trim().is_empty()),
        Field::Subject | Field::Description => {
            Some(record.subject.as_str()).filter(|v| !v.trim().is_empty())
        }
        Field::Scope => record.scope.as_deref().filter(|v| !v.is_empty()),
        Field::Body => record.body.as_deref().filter(|v| !v.is_empty()),
        Field::Footers => {
            if record.footers.iter().all(|f| f.trim().is_empty()) {
                return None;
            }
            return Some(record.footers.iter().map(String::as_str).collect());
        }
    };

    value.map(|v| vec![v])
}

/// Check one rule against a record.
///
/// Returns `None` for disabled rules and for rules the record satisfies.
pub fn check_rule(
    name: &RuleName,
    rule: &CompiledRule,
    record: &CommitRecord,
) -> Option<Finding> {
    let severity = rule.level.severity()?;
    let values = field_values(record, name.field);
    let field = name.field.as_str();

    let message = match &rule.constraint {
        Constraint::Presence => check_presence(field, values.as_deref()),
        Constraint::Format(regex) => match values {
            None if rule.optional || regex.is_match("") => None,
            None => Some(format!(
                "{} must match format '{}' (found none)",
                field,
                regex.as_str()
            )),
            Some(values) => values.iter().find(|v| !regex.is_match(v)).map(|v| {
                format!(
                    "{} must match format '{}' (found '{}')",
                    field,
                    regex.as_str(),
                    v
                )
            }),
        },
        Constraint::MaxLength(max) => {
            check_max_length(field, values.as_deref().unwrap_or_default(), *max)
        }
        Constraint::Enum(options) => {
            check_enum(field, values.as_deref(), options, rule.optional)
        }
    }?;

    Some(finding(name, severity, message))
}

fn finding(name: &RuleName, severity: Severity, message: String) -> Finding {
    Finding {
        rule: *name,
        severity,
        message: format!("{} [{}]", message, name),
    }
}

fn check_presence(field: &str, values: Option<&[&str]>) -> Option<String> {
    if values.is_none() {
        Some(format!("{} may not be empty", field))
    } else {
        None
    }
}

fn check_max_length(field: &str, values: &[&str], max: usize) -> Option<String> {
    values.iter().find_map(|v| {
        let len = v.chars().count();
        if len > max {
            Some(format!(
                "{} must not be longer than {} characters (found {})",
                field, max, len
            ))
        } else {
            None
        }
    })
}

fn check_enum(
    field: &str,
    values: Option<&[&str]>,
    options: &[String],
    optional: bool,
) -> Option<String> {
    let allowed = options.join(", ");

    let Some(values) = values else {
        if optional {
            return None;
        }
        return Some(format!("{} must be one of [{}] (found none)", field, allowed));
    };

    values
        .iter()
        .find(|v| !options.iter().any(|o| o.as_str() == **v))
        .map(|v| format!("{} must be one of [{}] (found '{}')", field, allowed, v))
}
