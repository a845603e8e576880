//! Reports module for CCRM
//!
//! Provides the student transcript and the GPA distribution report.

pub mod gpa;
pub mod transcript;

pub use gpa::GpaBreakdown;
pub use transcript::{Transcript, TranscriptRow};
