// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule levels and finding severities.

use serde::Serialize;
use std::fmt;

/// How a rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Never evaluated.
    Disabled,
    /// Violations are reported as warnings.
    Warning,
    /// Violations are reported as errors.
    Error,
}

impl Level {
    /// Get the canonical name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Disabled => "disabled",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    /// Severity of findings produced at this level, if any.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Level::Disabled => None,
            Level::Warning => Some(Severity::Warning),
            Level::Error => Some(Severity::Error),
        }
    }

    /// Map a numeric level (`0`, `1`, `2`) to a level.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Level::Disabled),
            1 => Some(Level::Warning),
            2 => Some(Level::Error),
            _ => None,
        }
    }
}

impl std::str::FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disabled" | "ignore" | "off" => Ok(Level::Disabled),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity carried by a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
        assert_eq!("Warn".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("ignore".parse::<Level>(), Ok(Level::Disabled));
        assert_eq!("disabled".parse::<Level>(), Ok(Level::Disabled));
        assert!("fatal".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_from_code() {
        assert_eq!(Level::from_code(0), Some(Level::Disabled));
        assert_eq!(Level::from_code(2), Some(Level::Error));
        assert_eq!(Level::from_code(3), None);
    }

    #[test]
    fn test_level_severity() {
        assert_eq!(Level::Disabled.severity(), None);
        assert_eq!(Level::Warning.severity(), Some(Severity::Warning));
        assert_eq!(Level::Error.severity(), Some(Severity::Error));
    }
}
