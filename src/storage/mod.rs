//! Storage layer for CCRM
//!
//! In-memory record stores backed by flat CSV files with atomic writes.

pub mod codec;
pub mod courses;
pub mod file_io;
pub mod students;
pub mod transfer;

pub use courses::CourseStore;
pub use file_io::{csv_reader, write_csv_atomic};
pub use students::StudentStore;
pub use transfer::Transfer;

use tracing::{info, warn};

use crate::config::paths::CcrmPaths;
use crate::config::settings::{DataFiles, Settings};
use crate::error::CcrmError;
use crate::models::Instructor;

/// Main storage coordinator that provides access to both record stores
pub struct Storage {
    paths: CcrmPaths,
    files: DataFiles,
    instructors: Vec<Instructor>,
    pub students: StudentStore,
    pub courses: CourseStore,
}

impl Storage {
    /// Create an empty Storage instance
    pub fn new(paths: CcrmPaths, settings: &Settings) -> Result<Self, CcrmError> {
        paths.ensure_directories()?;

        Ok(Self {
            paths,
            files: settings.files.clone(),
            instructors: settings.instructors.clone(),
            students: StudentStore::new(),
            courses: CourseStore::new(),
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CcrmPaths {
        &self.paths
    }

    /// Data file names in use
    pub fn files(&self) -> &DataFiles {
        &self.files
    }

    /// The fixed instructor roster
    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    /// Load all data from disk
    ///
    /// Files that do not exist yet leave their store empty. Enrollments that
    /// cannot be attached are dropped with a warning.
    pub fn load_all(&mut self) -> Result<(), CcrmError> {
        let transfer = Transfer::new(&self.paths);

        let students = if self.paths.data_file(&self.files.students).exists() {
            transfer.import_students(&self.files.students)?
        } else {
            Vec::new()
        };
        self.students.replace_all(students)?;

        let courses = if self.paths.data_file(&self.files.courses).exists() {
            transfer.import_courses(&self.files.courses, &self.instructors)?
        } else {
            Vec::new()
        };
        self.courses.replace_all(courses)?;

        if self.paths.data_file(&self.files.enrollments).exists() {
            let enrollments = transfer.import_enrollments(&self.files.enrollments)?;
            let rejected = self.students.attach_enrollments(enrollments)?;
            for e in &rejected {
                warn!(
                    student = e.student_id(),
                    course = %e.course_code(),
                    "dropping enrollment for unknown student or duplicate course"
                );
            }
        }

        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), CcrmError> {
        let transfer = Transfer::new(&self.paths);
        let students = self.students.list_all()?;

        transfer.export_students(&students, &self.files.students)?;
        transfer.export_courses(&self.courses.list_all()?, &self.files.courses)?;
        transfer.export_enrollments(&students, &self.files.enrollments)?;

        info!(
            students = students.len(),
            data_dir = %self.paths.data_dir().display(),
            "saved"
        );
        Ok(())
    }

    /// Check if storage has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, CourseCode, Grade, Semester, Student};
    use tempfile::TempDir;

    fn storage_in(temp_dir: &TempDir) -> Storage {
        let paths = CcrmPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings
            .instructors
            .push(Instructor::new("I1", "Grace Hopper", "g@example.edu", "CS"));
        Storage::new(paths, &settings).unwrap()
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("backups").exists());
        assert!(!storage.is_initialized());
        assert_eq!(storage.instructors().len(), 1);
    }

    #[test]
    fn test_load_without_files_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = storage_in(&temp_dir);

        storage.load_all().unwrap();
        assert_eq!(storage.students.count().unwrap(), 0);
        assert_eq!(storage.courses.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let course = Course::builder()
            .code(CourseCode::parse("CS-101").unwrap())
            .title("Intro")
            .credits(3)
            .department("CS")
            .semester(Semester::Fall)
            .instructor(Some("I1".into()))
            .build()
            .unwrap();
        storage.courses.add(course.clone()).unwrap();
        storage
            .students
            .add(Student::new("S1", "R1", "Ada", "ada@example.edu"))
            .unwrap();
        storage.students.enroll("S1", &course).unwrap();
        storage
            .students
            .assign_grade("S1", course.code(), Semester::Fall, Grade::A)
            .unwrap();
        storage.save_all().unwrap();

        let mut reloaded = storage_in(&temp_dir);
        reloaded.load_all().unwrap();

        let student = reloaded.students.get_by_id("S1").unwrap().unwrap();
        assert_eq!(student.enrollments().len(), 1);
        assert_eq!(reloaded.students.gpa("S1").unwrap(), 9.0);

        let loaded_course = reloaded.courses.get_by_code(course.code()).unwrap().unwrap();
        assert_eq!(loaded_course.instructor_id(), Some("I1"));
    }
}
