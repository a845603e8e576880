//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the record stores.

pub mod backup;
pub mod course;
pub mod data;
pub mod report;
pub mod student;

pub use backup::{handle_backup_command, BackupCommands};
pub use course::{handle_course_command, handle_instructor_command, CourseCommands, InstructorCommands};
pub use data::{handle_data_command, DataCommands, DataKind};
pub use report::{handle_report_command, ReportCommands};
pub use student::{handle_student_command, StudentCommands};
