//! Validated course identifier of the form `<DEPT>-<NUMBER>`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalized course code such as `CS-101`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Parse and normalize a course code
    ///
    /// Whitespace around the code is ignored and the department prefix is
    /// upper-cased, so `" cs-101"` and `"CS-101"` are the same code.
    pub fn parse(s: &str) -> Result<Self, CourseCodeError> {
        let s = s.trim();
        let (dept, number) = s
            .split_once('-')
            .ok_or_else(|| CourseCodeError::MissingSeparator(s.to_string()))?;

        if dept.is_empty() || !dept.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CourseCodeError::InvalidDepartment(s.to_string()));
        }

        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(CourseCodeError::InvalidNumber(s.to_string()));
        }

        Ok(Self(format!("{}-{}", dept.to_ascii_uppercase(), number)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Department prefix (e.g. "CS")
    pub fn department(&self) -> &str {
        self.0.split_once('-').map(|(d, _)| d).unwrap_or(&self.0)
    }

    /// Numeric part (e.g. "101")
    pub fn number(&self) -> &str {
        self.0.split_once('-').map(|(_, n)| n).unwrap_or("")
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for CourseCode {
    type Err = CourseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CourseCode {
    type Error = CourseCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.0
    }
}

/// Reasons a course code fails validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseCodeError {
    MissingSeparator(String),
    InvalidDepartment(String),
    InvalidNumber(String),
}

impl fmt::Display for CourseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(s) => {
                write!(f, "'{}' is not of the form DEPT-NUMBER", s)
            }
            Self::InvalidDepartment(s) => {
                write!(f, "'{}' must start with a letters-only department", s)
            }
            Self::InvalidNumber(s) => write!(f, "'{}' must end with a numeric part", s),
        }
    }
}

impl std::error::Error for CourseCodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let code = CourseCode::parse("CS-101").unwrap();
        assert_eq!(code.as_str(), "CS-101");
        assert_eq!(code.department(), "CS");
        assert_eq!(code.number(), "101");
    }

    #[test]
    fn test_normalization() {
        let a = CourseCode::parse(" mth-201 ").unwrap();
        let b = CourseCode::parse("MTH-201").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "MTH-201");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            CourseCode::parse("CS101"),
            Err(CourseCodeError::MissingSeparator(_))
        ));
        assert!(matches!(
            CourseCode::parse("-101"),
            Err(CourseCodeError::InvalidDepartment(_))
        ));
        assert!(matches!(
            CourseCode::parse("C5-101"),
            Err(CourseCodeError::InvalidDepartment(_))
        ));
        assert!(matches!(
            CourseCode::parse("CS-10A"),
            Err(CourseCodeError::InvalidNumber(_))
        ));
        assert!(matches!(
            CourseCode::parse("CS-"),
            Err(CourseCodeError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let code = CourseCode::parse("CS-101").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"CS-101\"");

        let back: CourseCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<CourseCode>("\"bogus\"").is_err());
    }
}
