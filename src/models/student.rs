//! Student model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::course_code::CourseCode;
use super::enrollment::Enrollment;
use super::person::{check_separators, DisplayInfo, Person, PersonKind, PersonValidationError};
use super::semester::Semester;

/// A registered student and their enrollments in enrollment order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    pub person: Person,

    /// Registration number, unique among active students
    pub reg_no: String,

    #[serde(default)]
    enrollments: Vec<Enrollment>,
}

impl Student {
    /// Create a new active student with no enrollments
    pub fn new(
        id: impl Into<String>,
        reg_no: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::from_person(Person::new(id, full_name, email), reg_no)
    }

    /// Wrap existing identity data
    pub fn from_person(person: Person, reg_no: impl Into<String>) -> Self {
        Self {
            person,
            reg_no: reg_no.into(),
            enrollments: Vec::new(),
        }
    }

    /// Validate identity fields and the registration number
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        self.person.validate()?;
        if self.reg_no.trim().is_empty() {
            return Err(PersonValidationError::EmptyRegNo);
        }
        check_separators("Registration number", &self.reg_no)
    }

    pub fn id(&self) -> &str {
        &self.person.id
    }

    pub fn name(&self) -> &str {
        &self.person.full_name
    }

    pub fn email(&self) -> &str {
        &self.person.email
    }

    pub fn is_active(&self) -> bool {
        self.person.active
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Find the enrollment for a course offering
    pub fn enrollment(&self, code: &CourseCode, semester: Semester) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.matches(code, semester))
    }

    /// Mutable access to the enrollment for a course offering
    pub fn enrollment_mut(
        &mut self,
        code: &CourseCode,
        semester: Semester,
    ) -> Option<&mut Enrollment> {
        self.enrollments.iter_mut().find(|e| e.matches(code, semester))
    }

    pub fn is_enrolled_in(&self, code: &CourseCode, semester: Semester) -> bool {
        self.enrollment(code, semester).is_some()
    }

    /// Credits held in one semester
    pub fn credits_in(&self, semester: Semester) -> u32 {
        self.enrollments
            .iter()
            .filter(|e| e.semester() == semester)
            .fold(0u32, |sum, e| sum.saturating_add(e.credits()))
    }

    /// Credits across all semesters
    pub fn total_credits(&self) -> u32 {
        self.enrollments
            .iter()
            .fold(0u32, |sum, e| sum.saturating_add(e.credits()))
    }

    // Admission control lives in services::enrollment; these stay crate-private
    // so nothing else can bypass it.
    pub(crate) fn push_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    pub(crate) fn remove_enrollments(&mut self, code: &CourseCode, semester: Semester) -> usize {
        let before = self.enrollments.len();
        self.enrollments.retain(|e| !e.matches(code, semester));
        before - self.enrollments.len()
    }
}

impl DisplayInfo for Student {
    fn person(&self) -> &Person {
        &self.person
    }

    fn kind(&self) -> PersonKind {
        PersonKind::Student
    }

    fn display_info(&self) -> String {
        format!("{} - {} - {}", self.reg_no, self.name(), self.email())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} courses",
            self.name(),
            self.reg_no,
            self.enrollments.len()
        )
    }
}
