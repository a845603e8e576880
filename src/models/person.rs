//! Person model
//!
//! Identity data shared by students and instructors, plus the `DisplayInfo`
//! capability each concrete person type implements.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which kind of person a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Student,
    Instructor,
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "Student"),
            Self::Instructor => write!(f, "Instructor"),
        }
    }
}

/// Identity fields common to every person in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: String,

    /// Full display name
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Day the record was created
    #[serde(default = "today")]
    date_created: NaiveDate,

    /// Soft-delete flag
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl Person {
    /// Create a new active person dated today
    pub fn new(id: impl Into<String>, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::restore(id, full_name, email, today(), true)
    }

    /// Rebuild a person from persisted fields
    pub fn restore(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        date_created: NaiveDate,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            date_created,
            active,
        }
    }

    /// Generate a short random identifier such as `STU-1a2b3c4d`
    pub fn generate_id(prefix: &str) -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("{}-{}", prefix, &uuid[..8])
    }

    /// When the record was created
    pub fn date_created(&self) -> NaiveDate {
        self.date_created
    }

    /// Mark this person as inactive
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Validate the identity fields
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.id.trim().is_empty() {
            return Err(PersonValidationError::EmptyId);
        }

        if self.full_name.trim().is_empty() {
            return Err(PersonValidationError::EmptyName);
        }

        if !self.email.contains('@') {
            return Err(PersonValidationError::InvalidEmail(self.email.clone()));
        }

        for (field, value) in [
            ("ID", &self.id),
            ("Name", &self.full_name),
            ("Email", &self.email),
        ] {
            check_separators(field, value)?;
        }

        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name, self.id)
    }
}

/// Data files are plain comma-separated lines, so no field may hold a comma
/// or a line break.
pub(crate) fn has_separator(value: &str) -> bool {
    value.contains([',', '\n', '\r'])
}

pub(crate) fn check_separators(
    field: &'static str,
    value: &str,
) -> Result<(), PersonValidationError> {
    if has_separator(value) {
        return Err(PersonValidationError::Separator {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Polymorphic one-line description of a person record
pub trait DisplayInfo {
    /// Shared identity data
    fn person(&self) -> &Person;

    /// Which variant this is
    fn kind(&self) -> PersonKind;

    /// Human-readable summary line
    fn display_info(&self) -> String;
}

/// Validation errors for person identity fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    EmptyId,
    EmptyName,
    EmptyRegNo,
    InvalidEmail(String),
    Separator { field: &'static str, value: String },
}

impl fmt::Display for PersonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::EmptyRegNo => write!(f, "Registration number cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: '{}'", email),
            Self::Separator { field, value } => write!(
                f,
                "{} cannot contain commas or line breaks: '{}'",
                field, value
            ),
        }
    }
}

impl std::error::Error for PersonValidationError {}
