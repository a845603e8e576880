//! Data import/export CLI commands
//!
//! Export writes the chosen collections to CSV files in the data directory.
//! Import reads them back and merges them into the stores: records whose key
//! is already taken are skipped, and enrollments must pass the same admission
//! checks as `student enroll`.

use std::collections::HashSet;

use clap::{Subcommand, ValueEnum};

use crate::error::CcrmResult;
use crate::storage::{Storage, Transfer};

/// Which data file(s) a command applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DataKind {
    Students,
    Courses,
    Enrollments,
    All,
}

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Export records to CSV in the data directory
    Export {
        #[arg(value_enum, default_value = "all")]
        kind: DataKind,
        /// File name inside the data directory (single kind only)
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Import records from CSV in the data directory
    Import {
        #[arg(value_enum)]
        kind: DataKind,
        /// File name inside the data directory (single kind only)
        #[arg(short, long)]
        file: Option<String>,
    },
}

/// Handle a data command
pub fn handle_data_command(storage: &Storage, cmd: DataCommands) -> CcrmResult<()> {
    let transfer = Transfer::new(storage.paths());

    match cmd {
        DataCommands::Export { kind, file } => {
            let students = storage.students.list_all()?;

            for kind in expand(kind) {
                let file = file_for(storage, kind, file.as_deref());
                let count = match kind {
                    DataKind::Students => transfer.export_students(&students, &file)?,
                    DataKind::Courses => {
                        transfer.export_courses(&storage.courses.list_all()?, &file)?
                    }
                    _ => transfer.export_enrollments(&students, &file)?,
                };
                println!("Exported {} record(s) to {}", count, file);
            }
        }

        DataCommands::Import { kind, file } => {
            for kind in expand(kind) {
                let file = file_for(storage, kind, file.as_deref());
                let (added, skipped) = match kind {
                    DataKind::Students => import_students(storage, &transfer, &file)?,
                    DataKind::Courses => import_courses(storage, &transfer, &file)?,
                    _ => {
                        let enrollments = transfer.import_enrollments(&file)?;
                        let total = enrollments.len();
                        let rejected = storage.students.merge_enrollments(enrollments)?;
                        (total - rejected.len(), rejected.len())
                    }
                };
                storage.save_all()?;
                println!(
                    "Imported {} record(s) from {} ({} skipped)",
                    added, file, skipped
                );
            }
        }
    }

    Ok(())
}

fn expand(kind: DataKind) -> Vec<DataKind> {
    match kind {
        DataKind::All => vec![DataKind::Students, DataKind::Courses, DataKind::Enrollments],
        single => vec![single],
    }
}

fn file_for(storage: &Storage, kind: DataKind, explicit: Option<&str>) -> String {
    let files = storage.files();
    match (kind, explicit) {
        (DataKind::All, _) | (_, None) => match kind {
            DataKind::Students => files.students.clone(),
            DataKind::Courses => files.courses.clone(),
            _ => files.enrollments.clone(),
        },
        (_, Some(name)) => name.to_string(),
    }
}

fn import_students(
    storage: &Storage,
    transfer: &Transfer<'_>,
    file: &str,
) -> CcrmResult<(usize, usize)> {
    let mut ids: HashSet<String> = storage
        .students
        .list_all()?
        .iter()
        .map(|s| s.id().to_string())
        .collect();
    let mut added = 0;
    let mut skipped = 0;

    for student in transfer.import_students(file)? {
        let taken = ids.contains(student.id())
            || (student.is_active() && storage.students.exists(&student.reg_no)?);
        if taken {
            skipped += 1;
        } else {
            ids.insert(student.id().to_string());
            storage.students.add(student)?;
            added += 1;
        }
    }

    Ok((added, skipped))
}

fn import_courses(
    storage: &Storage,
    transfer: &Transfer<'_>,
    file: &str,
) -> CcrmResult<(usize, usize)> {
    let mut added = 0;
    let mut skipped = 0;

    for course in transfer.import_courses(file, storage.instructors())? {
        if storage.courses.exists(course.code())? {
            skipped += 1;
        } else {
            storage.courses.add(course)?;
            added += 1;
        }
    }

    Ok((added, skipped))
}
