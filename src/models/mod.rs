//! Core data models for CCRM
//!
//! This module contains the data structures that represent the academic
//! records domain: people, courses, enrollments and grades.

pub mod course;
pub mod course_code;
pub mod enrollment;
pub mod grade;
pub mod instructor;
pub mod person;
pub mod semester;
pub mod student;

pub use course::{Course, CourseBuilder};
pub use course_code::{CourseCode, CourseCodeError};
pub use enrollment::Enrollment;
pub use grade::Grade;
pub use instructor::Instructor;
pub use person::{DisplayInfo, Person, PersonKind, PersonValidationError};
pub use semester::Semester;
pub use student::Student;
