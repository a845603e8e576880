//! Student CLI commands
//!
//! Implements CLI commands for student records, enrollment and grading.

use clap::Subcommand;

use crate::display::student::{format_student_details, format_student_list};
use crate::error::{CcrmError, CcrmResult};
use crate::models::{Course, CourseCode, Grade, Person, Semester, Student};
use crate::reports::Transcript;
use crate::storage::Storage;

/// Student subcommands
#[derive(Subcommand)]
pub enum StudentCommands {
    /// Add a new student
    Add {
        /// Registration number (must be unique)
        reg_no: String,
        /// Full name
        name: String,
        /// Email address
        email: String,
        /// Explicit student ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },
    /// List active students
    List {
        /// Only show students with at least this GPA
        #[arg(long)]
        min_gpa: Option<f64>,
    },
    /// Show student details
    Show {
        /// Registration number or ID
        student: String,
    },
    /// Search by name, registration number or email
    Search {
        term: String,
    },
    /// Change a student's name or email
    Edit {
        /// Registration number or ID
        student: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Deactivate a student
    Deactivate {
        /// Registration number or ID
        student: String,
    },
    /// Enroll a student in a course
    Enroll {
        /// Registration number or ID
        student: String,
        /// Course code (e.g. CS-101)
        course: String,
    },
    /// Drop a student from a course
    Unenroll {
        /// Registration number or ID
        student: String,
        /// Course code
        course: String,
    },
    /// Record a grade
    Grade {
        /// Registration number or ID
        student: String,
        /// Course code
        course: String,
        /// Letter grade (S, A, B, C, D, E, F)
        grade: String,
        /// Semester of the enrollment (defaults to the course's semester)
        #[arg(short, long)]
        semester: Option<String>,
    },
    /// Print a student's transcript
    Transcript {
        /// Registration number or ID
        student: String,
    },
}

/// Handle a student command
pub fn handle_student_command(storage: &Storage, cmd: StudentCommands) -> CcrmResult<()> {
    match cmd {
        StudentCommands::Add {
            reg_no,
            name,
            email,
            id,
        } => {
            if storage.students.exists(&reg_no)? {
                return Err(CcrmError::Validation(format!(
                    "A student with registration number '{}' already exists",
                    reg_no
                )));
            }

            let id = id.unwrap_or_else(|| Person::generate_id("STU"));
            if storage.students.list_all()?.iter().any(|s| s.id() == id) {
                return Err(CcrmError::Validation(format!(
                    "A student with ID '{}' already exists",
                    id
                )));
            }

            let student = Student::new(id, reg_no, name, email);
            student
                .validate()
                .map_err(|e| CcrmError::Validation(e.to_string()))?;

            storage.students.add(student.clone())?;
            storage.save_all()?;

            println!("Added student: {}", student.name());
            println!("  Reg No: {}", student.reg_no);
            println!("  ID: {}", student.id());
        }

        StudentCommands::List { min_gpa } => {
            let students = match min_gpa {
                Some(min) => storage.students.with_min_gpa(min)?,
                None => storage.students.list()?,
            };
            print!("{}", format_student_list(&students));
        }

        StudentCommands::Show { student } => {
            let found = find_student(storage, &student)?;
            let courses = storage.courses.list_all()?;
            print!(
                "{}",
                format_student_details(&found, &courses, storage.instructors())
            );
        }

        StudentCommands::Search { term } => {
            let students = storage.students.search(&term)?;
            print!("{}", format_student_list(&students));
        }

        StudentCommands::Edit {
            student,
            name,
            email,
        } => {
            if name.is_none() && email.is_none() {
                println!("No changes specified. Use --name or --email.");
                return Ok(());
            }

            let mut found = find_student(storage, &student)?;
            if let Some(name) = name {
                found.person.full_name = name;
            }
            if let Some(email) = email {
                found.person.email = email;
            }
            found
                .validate()
                .map_err(|e| CcrmError::Validation(e.to_string()))?;

            storage.students.update(found.clone())?;
            storage.save_all()?;
            println!("Updated student: {} ({})", found.name(), found.reg_no);
        }

        StudentCommands::Deactivate { student } => {
            let found = find_student(storage, &student)?;
            storage.students.deactivate(found.id())?;
            storage.save_all()?;
            println!("Deactivated student: {} ({})", found.name(), found.reg_no);
        }

        StudentCommands::Enroll { student, course } => {
            let found = find_student(storage, &student)?;
            let course = find_course(storage, &course)?;

            let enrollment = storage.students.enroll(found.id(), &course)?;
            storage.save_all()?;

            let credits = storage
                .students
                .get_by_id(found.id())?
                .map(|s| s.credits_in(course.semester()))
                .unwrap_or_default();
            println!("Enrolled {} in {}", found.name(), course.short_info());
            println!(
                "  Semester: {} ({} credits this semester)",
                enrollment.semester(),
                credits
            );
        }

        StudentCommands::Unenroll { student, course } => {
            let found = find_student(storage, &student)?;
            let course = find_course(storage, &course)?;

            let removed = storage.students.unenroll(found.id(), &course)?;
            if removed == 0 {
                println!(
                    "{} was not enrolled in {} for {}",
                    found.name(),
                    course.code(),
                    course.semester()
                );
                return Ok(());
            }
            storage.save_all()?;
            println!("Dropped {} from {}", found.name(), course.short_info());
        }

        StudentCommands::Grade {
            student,
            course,
            grade,
            semester,
        } => {
            let found = find_student(storage, &student)?;
            let code = parse_code(&course)?;
            let grade = Grade::parse(&grade).ok_or_else(|| {
                CcrmError::Validation(format!(
                    "Invalid grade: '{}'. Valid grades: S, A, B, C, D, E, F",
                    grade
                ))
            })?;
            let semester = match semester {
                Some(s) => parse_semester(&s)?,
                None => find_course(storage, &course)?.semester(),
            };

            storage
                .students
                .assign_grade(found.id(), &code, semester, grade)?;
            storage.save_all()?;
            println!(
                "Recorded {} ({:.1}) for {} in {} {}",
                grade,
                grade.points(),
                found.name(),
                code,
                semester
            );
        }

        StudentCommands::Transcript { student } => {
            let found = find_student(storage, &student)?;
            let transcript = Transcript::generate(storage, &found.reg_no)?;
            print!("{}", transcript.format_terminal());
        }
    }

    Ok(())
}

/// Look up an active student by registration number, then by ID
pub(crate) fn find_student(storage: &Storage, key: &str) -> CcrmResult<Student> {
    if let Some(student) = storage.students.get_by_reg_no(key)? {
        return Ok(student);
    }
    storage
        .students
        .get_by_id(key)?
        .ok_or_else(|| CcrmError::student_not_found(key))
}

/// Look up an active course by code
pub(crate) fn find_course(storage: &Storage, code: &str) -> CcrmResult<Course> {
    let parsed = parse_code(code)?;
    storage
        .courses
        .get_by_code(&parsed)?
        .ok_or_else(|| CcrmError::course_not_found(parsed.to_string()))
}

pub(crate) fn parse_code(code: &str) -> CcrmResult<CourseCode> {
    CourseCode::parse(code).map_err(|e| CcrmError::Validation(e.to_string()))
}

pub(crate) fn parse_semester(value: &str) -> CcrmResult<Semester> {
    Semester::parse(value).ok_or_else(|| {
        CcrmError::Validation(format!(
            "Invalid semester: '{}'. Valid semesters: spring, summer, fall",
            value
        ))
    })
}
