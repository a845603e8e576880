//! Report CLI commands

use clap::Subcommand;

use crate::display::student::format_student_list;
use crate::error::CcrmResult;
use crate::reports::GpaBreakdown;
use crate::services::calculate_gpa;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Count of students per GPA band
    Gpa,
    /// Students at or above a GPA threshold, best first
    Top {
        #[arg(long, default_value = "9.0")]
        min_gpa: f64,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> CcrmResult<()> {
    match cmd {
        ReportCommands::Gpa => {
            let breakdown = GpaBreakdown::generate(storage)?;
            print!("{}", breakdown.format_terminal());
        }

        ReportCommands::Top { min_gpa } => {
            let mut students = storage.students.with_min_gpa(min_gpa)?;
            students.sort_by(|a, b| calculate_gpa(b).total_cmp(&calculate_gpa(a)));
            print!("{}", format_student_list(&students));
        }
    }

    Ok(())
}
