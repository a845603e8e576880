//! Course and instructor CLI commands

use clap::Subcommand;

use super::student::{find_course, parse_code, parse_semester};
use crate::display::course::{format_course_details, format_course_list, format_instructor_list};
use crate::error::{CcrmError, CcrmResult};
use crate::models::{Course, Instructor};
use crate::storage::Storage;

/// Course subcommands
#[derive(Subcommand)]
pub enum CourseCommands {
    /// Add a new course
    Add {
        /// Course code (e.g. CS-101)
        code: String,
        /// Course title
        title: String,
        /// Credit hours
        #[arg(short, long)]
        credits: u32,
        /// Semester (spring, summer, fall)
        #[arg(short, long)]
        semester: String,
        /// Department
        #[arg(short, long, default_value = "")]
        department: String,
        /// Instructor ID
        #[arg(short, long)]
        instructor: Option<String>,
    },
    /// List active courses
    List {
        /// Only courses in this semester
        #[arg(short, long)]
        semester: Option<String>,
        /// Only courses taught by this instructor ID
        #[arg(short, long)]
        instructor: Option<String>,
    },
    /// Show course details
    Show {
        code: String,
    },
    /// Search by title, code or department
    Search {
        term: String,
    },
    /// Change a course's title, credits or department
    Edit {
        code: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        credits: Option<u32>,
        #[arg(short, long)]
        department: Option<String>,
    },
    /// Deactivate a course
    Deactivate {
        code: String,
    },
    /// Assign an instructor to a course (omit the ID to clear it)
    Assign {
        code: String,
        instructor: Option<String>,
    },
}

/// Instructor subcommands
#[derive(Subcommand)]
pub enum InstructorCommands {
    /// List the configured instructors
    List,
}

/// Handle a course command
pub fn handle_course_command(storage: &Storage, cmd: CourseCommands) -> CcrmResult<()> {
    let instructors = storage.instructors();

    match cmd {
        CourseCommands::Add {
            code,
            title,
            credits,
            semester,
            department,
            instructor,
        } => {
            let code = parse_code(&code)?;
            if storage.courses.exists(&code)? {
                return Err(CcrmError::Validation(format!(
                    "Course '{}' already exists",
                    code
                )));
            }
            if let Some(id) = &instructor {
                require_instructor(instructors, id)?;
            }

            let course = Course::builder()
                .code(code)
                .title(title)
                .credits(credits)
                .semester(parse_semester(&semester)?)
                .department(department)
                .instructor(instructor)
                .build()?;

            storage.courses.add(course.clone())?;
            storage.save_all()?;
            println!("Added course: {}", course.describe(instructors));
        }

        CourseCommands::List {
            semester,
            instructor,
        } => {
            let mut courses = match &semester {
                Some(s) => storage.courses.by_semester(parse_semester(s)?)?,
                None => storage.courses.list()?,
            };
            if let Some(id) = &instructor {
                courses.retain(|c| c.instructor_id() == Some(id.as_str()));
            }
            print!("{}", format_course_list(&courses, instructors));
        }

        CourseCommands::Show { code } => {
            let course = find_course(storage, &code)?;
            print!("{}", format_course_details(&course, instructors));
        }

        CourseCommands::Search { term } => {
            let courses = storage.courses.search(&term)?;
            print!("{}", format_course_list(&courses, instructors));
        }

        CourseCommands::Edit {
            code,
            title,
            credits,
            department,
        } => {
            if title.is_none() && credits.is_none() && department.is_none() {
                println!("No changes specified. Use --title, --credits or --department.");
                return Ok(());
            }

            let found = find_course(storage, &code)?;
            let updated = Course::builder()
                .code(found.code().clone())
                .title(title.unwrap_or_else(|| found.title().to_string()))
                .credits(credits.unwrap_or(found.credits()))
                .department(department.unwrap_or_else(|| found.department().to_string()))
                .semester(found.semester())
                .instructor(found.instructor_id().map(String::from))
                .build()?;

            storage.courses.update(updated.clone())?;
            storage.save_all()?;
            println!("Updated course: {}", updated.describe(instructors));
        }

        CourseCommands::Deactivate { code } => {
            let course = find_course(storage, &code)?;
            storage.courses.deactivate(course.code())?;
            storage.save_all()?;
            println!("Deactivated course: {}", course.short_info());
        }

        CourseCommands::Assign { code, instructor } => {
            let code = parse_code(&code)?;
            if let Some(id) = &instructor {
                require_instructor(instructors, id)?;
            }

            let course = storage.courses.assign_instructor(&code, instructor)?;
            storage.save_all()?;
            println!("{}", course.describe(instructors));
        }
    }

    Ok(())
}

/// Handle an instructor command
pub fn handle_instructor_command(storage: &Storage, cmd: InstructorCommands) -> CcrmResult<()> {
    match cmd {
        InstructorCommands::List => {
            print!("{}", format_instructor_list(storage.instructors()));
            if storage.instructors().is_empty() {
                println!();
                println!(
                    "Add instructors to {}",
                    storage.paths().settings_file().display()
                );
            }
        }
    }

    Ok(())
}

fn require_instructor<'a>(instructors: &'a [Instructor], id: &str) -> CcrmResult<&'a Instructor> {
    Instructor::find(instructors, id).ok_or_else(|| CcrmError::NotFound {
        entity_type: "Instructor",
        identifier: id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CcrmPaths, Settings};
    use crate::models::CourseCode;
    use tempfile::TempDir;

    fn storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CcrmPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings
            .instructors
            .push(Instructor::new("I1", "Grace Hopper", "g@example.edu", "CS"));
        (Storage::new(paths, &settings).unwrap(), temp_dir)
    }

    fn add(storage: &Storage, code: &str, instructor: Option<&str>) -> CcrmResult<()> {
        handle_course_command(
            storage,
            CourseCommands::Add {
                code: code.into(),
                title: "Intro".into(),
                credits: 3,
                semester: "fall".into(),
                department: "CS".into(),
                instructor: instructor.map(String::from),
            },
        )
    }

    #[test]
    fn test_add_course() {
        let (storage, _tmp) = storage();
        add(&storage, "cs-101", Some("I1")).unwrap();

        let course = storage
            .courses
            .get_by_code(&CourseCode::parse("CS-101").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(course.instructor_id(), Some("I1"));
    }

    #[test]
    fn test_add_rejects_duplicates_and_unknown_instructor() {
        let (storage, _tmp) = storage();
        add(&storage, "CS-101", None).unwrap();

        assert!(matches!(
            add(&storage, "CS-101", None),
            Err(CcrmError::Validation(_))
        ));
        assert!(add(&storage, "CS-102", Some("I9")).unwrap_err().is_not_found());
        assert_eq!(storage.courses.count().unwrap(), 1);
    }

    #[test]
    fn test_edit_keeps_instructor() {
        let (storage, _tmp) = storage();
        add(&storage, "CS-101", Some("I1")).unwrap();

        handle_course_command(
            &storage,
            CourseCommands::Edit {
                code: "CS-101".into(),
                title: Some("Programming I".into()),
                credits: Some(4),
                department: None,
            },
        )
        .unwrap();

        let course = storage.courses.list().unwrap().remove(0);
        assert_eq!(course.title(), "Programming I");
        assert_eq!(course.credits(), 4);
        assert_eq!(course.instructor_id(), Some("I1"));
    }

    #[test]
    fn test_assign_and_clear_instructor() {
        let (storage, _tmp) = storage();
        add(&storage, "CS-101", None).unwrap();

        handle_course_command(
            &storage,
            CourseCommands::Assign {
                code: "CS-101".into(),
                instructor: Some("I1".into()),
            },
        )
        .unwrap();
        assert_eq!(storage.courses.by_instructor("I1").unwrap().len(), 1);

        handle_course_command(
            &storage,
            CourseCommands::Assign {
                code: "CS-101".into(),
                instructor: None,
            },
        )
        .unwrap();
        assert!(storage.courses.by_instructor("I1").unwrap().is_empty());
    }

    #[test]
    fn test_commas_rejected_in_course_fields() {
        let (storage, _tmp) = storage();
        let err = handle_course_command(
            &storage,
            CourseCommands::Add {
                code: "CS-101".into(),
                title: "Data, Structures".into(),
                credits: 3,
                semester: "fall".into(),
                department: "CS".into(),
                instructor: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, CcrmError::Construction(_)));

        add(&storage, "CS-101", None).unwrap();
        let err = handle_course_command(
            &storage,
            CourseCommands::Edit {
                code: "CS-101".into(),
                title: None,
                credits: None,
                department: Some("Computer,Science".into()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, CcrmError::Construction(_)));
        assert_eq!(storage.courses.list().unwrap()[0].department(), "CS");
    }
}
