//! Enrollment model
//!
//! Links a student to a course. The course's semester and credits are taken
//! when the enrollment is created; they key the duplicate check and weight
//! the GPA.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::course::Course;
use super::course_code::CourseCode;
use super::grade::Grade;
use super::semester::Semester;

/// One student's registration in one course offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    student_id: String,
    course_code: CourseCode,
    semester: Semester,
    credits: u32,
    enrollment_date: NaiveDate,
    grade: Option<Grade>,
}

impl Enrollment {
    /// Create an ungraded enrollment dated today
    pub fn new(student_id: impl Into<String>, course: &Course) -> Self {
        Self::restore(
            student_id,
            course.code().clone(),
            course.semester(),
            course.credits(),
            Local::now().date_naive(),
            None,
        )
    }

    /// Rebuild an enrollment from persisted fields
    pub fn restore(
        student_id: impl Into<String>,
        course_code: CourseCode,
        semester: Semester,
        credits: u32,
        enrollment_date: NaiveDate,
        grade: Option<Grade>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            course_code,
            semester,
            credits,
            enrollment_date,
            grade,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course_code(&self) -> &CourseCode {
        &self.course_code
    }

    pub fn semester(&self) -> Semester {
        self.semester
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    pub fn has_grade(&self) -> bool {
        self.grade.is_some()
    }

    /// Overwrite the grade; re-grading is allowed
    pub fn set_grade(&mut self, grade: Grade) {
        self.grade = Some(grade);
    }

    /// Whether this enrollment is for the given course offering
    pub fn matches(&self, code: &CourseCode, semester: Semester) -> bool {
        &self.course_code == code && self.semester == semester
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} on {}",
            self.student_id, self.course_code, self.enrollment_date
        )?;
        if let Some(grade) = self.grade {
            write!(f, " - Grade: {}", grade)?;
        }
        Ok(())
    }
}
