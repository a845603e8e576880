//! Service layer for CCRM
//!
//! Business rules that sit on top of the data models: admission control for
//! enrollments and GPA aggregation.

pub mod enrollment;

pub use enrollment::{
    admit, assign_grade, calculate_gpa, enroll, unenroll, MAX_CREDITS_PER_SEMESTER,
};
