//! Display formatting for terminal output
//!
//! Provides table and detail views of students, courses and instructors.

pub mod course;
pub mod student;

pub use course::{format_course_details, format_course_list, format_instructor_list};
pub use student::{format_student_details, format_student_list};
