//! Custom error types for CCRM
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Semester;

/// The main error type for CCRM operations
#[derive(Error, Debug)]
pub enum CcrmError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Required builder fields were missing or invalid
    #[error("Construction error: {0}")]
    Construction(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The student already holds an enrollment for this course and semester
    #[error("Student {student} is already enrolled in {course} ({semester})")]
    DuplicateEnrollment {
        student: String,
        course: String,
        semester: Semester,
    },

    /// Enrolling would push the semester's credits past the limit
    #[error("Credit limit exceeded: {current} + {adding} > {max}")]
    CreditLimitExceeded { current: u32, adding: u32, max: u32 },

    /// A CSV import failed; nothing from the file was kept
    #[error("Import of '{file}' failed: {failure}")]
    FileImport { file: String, failure: ImportFailure },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Backup errors
    #[error("Backup error: {0}")]
    Backup(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Why an import was aborted
#[derive(Error, Debug)]
pub enum ImportFailure {
    #[error("file not found")]
    FileNotFound,

    #[error("bad line {line}: {source}")]
    BadLine {
        line: usize,
        #[source]
        source: FieldError,
    },
}

/// Field-level parse failure for a single CSV row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("invalid integer in '{field}': {value}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("invalid semester: {0}")]
    InvalidSemester(String),

    #[error("invalid course code: {0}")]
    InvalidCourseCode(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid grade: {0}")]
    InvalidGrade(String),

    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("{0}")]
    Construction(String),
}

impl CcrmError {
    /// Create a "not found" error for students
    pub fn student_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Student",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for courses
    pub fn course_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Course",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for enrollments
    pub fn enrollment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Enrollment",
            identifier: identifier.into(),
        }
    }

    /// Import aborted at a specific line
    pub fn bad_line(file: impl Into<String>, line: usize, source: FieldError) -> Self {
        Self::FileImport {
            file: file.into(),
            failure: ImportFailure::BadLine { line, source },
        }
    }

    /// Import aborted because the file is missing
    pub fn import_file_missing(file: impl Into<String>) -> Self {
        Self::FileImport {
            file: file.into(),
            failure: ImportFailure::FileNotFound,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from admission control
    pub fn is_admission_rejection(&self) -> bool {
        matches!(
            self,
            Self::DuplicateEnrollment { .. } | Self::CreditLimitExceeded { .. }
        )
    }
}

impl From<std::io::Error> for CcrmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CcrmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for CcrmError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(format!("CSV error: {}", err))
    }
}

/// Result type alias for CCRM operations
pub type CcrmResult<T> = Result<T, CcrmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CcrmError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CcrmError::student_not_found("S1");
        assert_eq!(err.to_string(), "Student not found: S1");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_credit_limit_error() {
        let err = CcrmError::CreditLimitExceeded {
            current: 16,
            adding: 4,
            max: 18,
        };
        assert_eq!(err.to_string(), "Credit limit exceeded: 16 + 4 > 18");
        assert!(err.is_admission_rejection());
    }

    #[test]
    fn test_bad_line_error() {
        let err = CcrmError::bad_line(
            "students.csv",
            3,
            FieldError::TooFewFields {
                expected: 6,
                found: 2,
            },
        );
        assert_eq!(
            err.to_string(),
            "Import of 'students.csv' failed: bad line 3: expected at least 6 fields, found 2"
        );
    }

    #[test]
    fn test_missing_file_error() {
        let err = CcrmError::import_file_missing("nope.csv");
        assert!(matches!(
            err,
            CcrmError::FileImport {
                failure: ImportFailure::FileNotFound,
                ..
            }
        ));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CcrmError = io_err.into();
        assert!(matches!(err, CcrmError::Io(_)));
    }
}
