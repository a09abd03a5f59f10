// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule identifiers.
//!
//! A rule name is `<field>-<check>` (`type-empty`, `description-max-length`)
//! or a bare field name for the enumeration check (`type`, `scope`).

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

lazy_static! {
    static ref RULE_NAME_REGEX: Regex = Regex::new(
        r"^(?P<field>type|scope|subject|description|body|footers)(?:-(?P<check>empty|format|max-length))?$"
    ).unwrap();
}

/// Part of the commit record a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Type,
    Scope,
    Subject,
    Description,
    Body,
    Footers,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Scope => "scope",
            Field::Subject => "subject",
            Field::Description => "description",
            Field::Body => "body",
            Field::Footers => "footers",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "type" => Some(Field::Type),
            "scope" => Some(Field::Scope),
            "subject" => Some(Field::Subject),
            "description" => Some(Field::Description),
            "body" => Some(Field::Body),
            "footers" => Some(Field::Footers),
            _ => None,
        }
    }
}

/// Constraint a rule applies to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Check {
    /// The field must be present.
    Empty,
    /// The field must match a pattern.
    Format,
    /// The field must not exceed a length.
    MaxLength,
    /// The field must be one of a set of options.
    Enum,
}

impl Check {
    fn suffix(&self) -> Option<&'static str> {
        match self {
            Check::Empty => Some("empty"),
            Check::Format => Some("format"),
            Check::MaxLength => Some("max-length"),
            Check::Enum => None,
        }
    }
}

/// A validated rule name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleName {
    pub field: Field,
    pub check: Check,
}

impl RuleName {
    pub const fn new(field: Field, check: Check) -> Self {
        Self { field, check }
    }
}

impl std::str::FromStr for RuleName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = RULE_NAME_REGEX.captures(s).ok_or(())?;
        let field = captures
            .name("field")
            .and_then(|m| Field::from_name(m.as_str()))
            .ok_or(())?;
        let check = match captures.name("check").map(|m| m.as_str()) {
            None => Check::Enum,
            Some("empty") => Check::Empty,
            Some("format") => Check::Format,
            Some("max-length") => Check::MaxLength,
            Some(_) => return Err(()),
        };
        Ok(Self { field, check })
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.check.suffix() {
            Some(suffix) => write!(f, "{}-{}", self.field.as_str(), suffix),
            None => write!(f, "{}", self.field.as_str()),
        }
    }
}

impl Serialize for RuleName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
