//! Academic semester

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Term in which a course runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    Spring,
    Summer,
    Fall,
}

impl Semester {
    pub const ALL: [Semester; 3] = [Semester::Spring, Semester::Summer, Semester::Fall];

    /// Upper-case name used in CSV files (e.g. "FALL")
    pub fn code(&self) -> &'static str {
        match self {
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
        }
    }

    /// Parse a semester name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "SPRING" => Some(Self::Spring),
            "SUMMER" => Some(Self::Summer),
            "FALL" => Some(Self::Fall),
            _ => None,
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        })
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown semester '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Semester::parse("FALL"), Some(Semester::Fall));
        assert_eq!(Semester::parse("spring"), Some(Semester::Spring));
        assert_eq!(Semester::parse(" Summer "), Some(Semester::Summer));
        assert_eq!(Semester::parse("winter"), None);
    }

    #[test]
    fn test_code_and_display() {
        assert_eq!(Semester::Fall.code(), "FALL");
        assert_eq!(Semester::Fall.to_string(), "Fall");
        for semester in Semester::ALL {
            assert_eq!(Semester::parse(semester.code()), Some(semester));
        }
    }
}
