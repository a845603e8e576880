//! Course model
//!
//! A course's code, title, credits, department and semester are fixed once
//! built. Only the instructor assignment and the active flag change in place.
//! The instructor is held by id and resolved against the instructor list when
//! displayed, so reassigning it changes how every existing enrollment in the
//! course is shown.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::course_code::CourseCode;
use super::instructor::Instructor;
use super::person::has_separator;
use super::semester::Semester;
use crate::error::{CcrmError, CcrmResult};

/// A course offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: CourseCode,
    title: String,
    credits: u32,
    department: String,
    semester: Semester,
    instructor_id: Option<String>,
    active: bool,
}

impl Course {
    /// Start building a course
    pub fn builder() -> CourseBuilder {
        CourseBuilder::default()
    }

    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn semester(&self) -> Semester {
        self.semester
    }

    pub fn instructor_id(&self) -> Option<&str> {
        self.instructor_id.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Assign (or clear) the teaching instructor
    pub fn set_instructor(&mut self, instructor_id: Option<String>) {
        self.instructor_id = instructor_id;
    }

    /// Resolve the instructor against a fixed list
    pub fn instructor<'a>(&self, instructors: &'a [Instructor]) -> Option<&'a Instructor> {
        self.instructor_id
            .as_deref()
            .and_then(|id| Instructor::find(instructors, id))
    }

    /// Look up a course by code, preferring the active one over any
    /// deactivated course that shares the code
    pub fn find<'a>(courses: &'a [Course], code: &CourseCode) -> Option<&'a Course> {
        courses
            .iter()
            .find(|c| c.is_active() && c.code() == code)
            .or_else(|| courses.iter().find(|c| c.code() == code))
    }

    /// "CS-101: Intro to Programming"
    pub fn short_info(&self) -> String {
        format!("{}: {}", self.code, self.title)
    }

    /// Full description with the instructor name resolved
    pub fn describe(&self, instructors: &[Instructor]) -> String {
        let instructor_name = self
            .instructor(instructors)
            .map(|i| i.name().to_string())
            .unwrap_or_else(|| "No instructor".to_string());
        format!(
            "{} - {} ({} cr) - {} - {}",
            self.code, self.title, self.credits, instructor_name, self.semester
        )
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} cr) - {}",
            self.code, self.title, self.credits, self.semester
        )
    }
}

/// Builder for [`Course`]; `code`, `title` and `semester` are required
#[derive(Debug, Clone, Default)]
pub struct CourseBuilder {
    code: Option<CourseCode>,
    title: Option<String>,
    credits: u32,
    department: String,
    semester: Option<Semester>,
    instructor_id: Option<String>,
}

impl CourseBuilder {
    pub fn code(mut self, code: CourseCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn semester(mut self, semester: Semester) -> Self {
        self.semester = Some(semester);
        self
    }

    pub fn instructor(mut self, instructor_id: Option<String>) -> Self {
        self.instructor_id = instructor_id;
        self
    }

    /// Validate and build an active course
    pub fn build(self) -> CcrmResult<Course> {
        let code = self
            .code
            .ok_or_else(|| CcrmError::Construction("course code is required".into()))?;
        let title = self
            .title
            .ok_or_else(|| CcrmError::Construction("course title is required".into()))?;
        let semester = self
            .semester
            .ok_or_else(|| CcrmError::Construction("course semester is required".into()))?;

        let text_fields = [
            ("title", Some(title.as_str())),
            ("department", Some(self.department.as_str())),
            ("instructor id", self.instructor_id.as_deref()),
        ];
        for (field, value) in text_fields {
            if let Some(value) = value.filter(|v| has_separator(v)) {
                return Err(CcrmError::Construction(format!(
                    "course {} cannot contain commas or line breaks: '{}'",
                    field, value
                )));
            }
        }

        if self.credits == 0 {
            return Err(CcrmError::Construction(format!(
                "course {} must carry at least one credit",
                code
            )));
        }

        Ok(Course {
            code,
            title,
            credits: self.credits,
            department: self.department,
            semester,
            instructor_id: self.instructor_id,
            active: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CourseCode {
        CourseCode::parse(s).unwrap()
    }

    fn sample() -> Course {
        Course::builder()
            .code(code("CS-101"))
            .title("Intro to Programming")
            .credits(3)
            .department("Computer Science")
            .semester(Semester::Fall)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build() {
        let course = sample();
        assert_eq!(course.code().as_str(), "CS-101");
        assert_eq!(course.credits(), 3);
        assert_eq!(course.semester(), Semester::Fall);
        assert!(course.is_active());
        assert!(course.instructor_id().is_none());
    }

    #[test]
    fn test_find_prefers_active_course() {
        let mut old = Course::builder()
            .code(code("CS-101"))
            .title("Old Intro")
            .credits(3)
            .semester(Semester::Fall)
            .build()
            .unwrap();
        old.set_active(false);
        let current = Course::builder()
            .code(code("CS-101"))
            .title("New Intro")
            .credits(3)
            .semester(Semester::Fall)
            .build()
            .unwrap();

        let courses = vec![old.clone(), current];
        assert_eq!(Course::find(&courses, &code("CS-101")).unwrap().title(), "New Intro");

        let only_old = vec![old];
        assert_eq!(Course::find(&only_old, &code("CS-101")).unwrap().title(), "Old Intro");
        assert!(Course::find(&only_old, &code("CS-102")).is_none());
    }

    #[test]
    fn test_build_rejects_separators() {
        let result = Course::builder()
            .code(CourseCode::parse("CS-101").unwrap())
            .title("Data, Structures")
            .credits(3)
            .semester(Semester::Fall)
            .build();
        assert!(matches!(result, Err(CcrmError::Construction(_))));

        let result = Course::builder()
            .code(CourseCode::parse("CS-101").unwrap())
            .title("Data Structures")
            .department("Computer\nScience")
            .credits(3)
            .semester(Semester::Fall)
            .build();
        assert!(matches!(result, Err(CcrmError::Construction(_))));
    }

    #[test]
    fn test_build_requires_code_and_title() {
        let missing_code = Course::builder()
            .title("No Code")
            .credits(3)
            .semester(Semester::Fall)
            .build();
        assert!(matches!(missing_code, Err(CcrmError::Construction(_))));

        let missing_title = Course::builder()
            .code(code("CS-101"))
            .credits(3)
            .semester(Semester::Fall)
            .build();
        assert!(matches!(missing_title, Err(CcrmError::Construction(_))));
    }

    #[test]
    fn test_build_rejects_zero_credits() {
        let result = Course::builder()
            .code(code("CS-101"))
            .title("Zero")
            .semester(Semester::Spring)
            .build();
        assert!(matches!(result, Err(CcrmError::Construction(_))));
    }

    #[test]
    fn test_instructor_resolution_follows_reassignment() {
        let instructors = vec![
            Instructor::new("I1", "Grace Hopper", "grace@example.edu", "CS"),
            Instructor::new("I2", "Alan Turing", "alan@example.edu", "CS"),
        ];
        let mut course = sample();
        assert!(course.describe(&instructors).contains("No instructor"));

        course.set_instructor(Some("I1".into()));
        assert_eq!(course.instructor(&instructors).unwrap().name(), "Grace Hopper");

        course.set_instructor(Some("I2".into()));
        assert!(course.describe(&instructors).contains("Alan Turing"));

        course.set_instructor(Some("I9".into()));
        assert!(course.instructor(&instructors).is_none());
    }

    #[test]
    fn test_short_info() {
        assert_eq!(sample().short_info(), "CS-101: Intro to Programming");
    }
}
