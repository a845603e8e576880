//! Course store
//!
//! In-memory course collection keyed by course code, kept in insertion order.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{CcrmError, CcrmResult};
use crate::models::{Course, CourseCode, Semester};

/// Store for course records
#[derive(Default)]
pub struct CourseStore {
    data: RwLock<Vec<Course>>,
}

impl CourseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CcrmResult<RwLockReadGuard<'_, Vec<Course>>> {
        self.data
            .read()
            .map_err(|e| CcrmError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> CcrmResult<RwLockWriteGuard<'_, Vec<Course>>> {
        self.data
            .write()
            .map_err(|e| CcrmError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Append a course; uniqueness is the caller's concern
    pub fn add(&self, course: Course) -> CcrmResult<()> {
        self.write()?.push(course);
        Ok(())
    }

    /// Replace the whole collection
    pub fn replace_all(&self, courses: Vec<Course>) -> CcrmResult<()> {
        *self.write()? = courses;
        Ok(())
    }

    /// First active course with this code
    pub fn get_by_code(&self, code: &CourseCode) -> CcrmResult<Option<Course>> {
        Ok(self
            .read()?
            .iter()
            .find(|c| c.is_active() && c.code() == code)
            .cloned())
    }

    /// Active courses in insertion order
    pub fn list(&self) -> CcrmResult<Vec<Course>> {
        Ok(self
            .read()?
            .iter()
            .filter(|c| c.is_active())
            .cloned()
            .collect())
    }

    /// Every course, including deactivated ones
    pub fn list_all(&self) -> CcrmResult<Vec<Course>> {
        Ok(self.read()?.clone())
    }

    /// Remove any course with the same code, then append this one
    pub fn update(&self, course: Course) -> CcrmResult<()> {
        let mut data = self.write()?;
        data.retain(|c| c.code() != course.code());
        data.push(course);
        Ok(())
    }

    /// Soft-delete the active course with this code; returns whether one matched
    pub fn deactivate(&self, code: &CourseCode) -> CcrmResult<bool> {
        let mut data = self.write()?;
        match data.iter_mut().find(|c| c.is_active() && c.code() == code) {
            Some(course) => {
                course.set_active(false);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Point an active course at a different instructor
    pub fn assign_instructor(
        &self,
        code: &CourseCode,
        instructor_id: Option<String>,
    ) -> CcrmResult<Course> {
        let mut data = self.write()?;
        let course = data
            .iter_mut()
            .find(|c| c.is_active() && c.code() == code)
            .ok_or_else(|| CcrmError::course_not_found(code.to_string()))?;
        course.set_instructor(instructor_id);
        Ok(course.clone())
    }

    /// Case-insensitive substring search over title, code and department
    pub fn search(&self, term: &str) -> CcrmResult<Vec<Course>> {
        let term = term.to_lowercase();
        Ok(self
            .read()?
            .iter()
            .filter(|c| {
                c.is_active()
                    && (c.title().to_lowercase().contains(&term)
                        || c.code().as_str().to_lowercase().contains(&term)
                        || c.department().to_lowercase().contains(&term))
            })
            .cloned()
            .collect())
    }

    /// Active courses taught by an instructor
    pub fn by_instructor(&self, instructor_id: &str) -> CcrmResult<Vec<Course>> {
        Ok(self
            .read()?
            .iter()
            .filter(|c| c.is_active() && c.instructor_id() == Some(instructor_id))
            .cloned()
            .collect())
    }

    /// Active courses offered in a semester
    pub fn by_semester(&self, semester: Semester) -> CcrmResult<Vec<Course>> {
        Ok(self
            .read()?
            .iter()
            .filter(|c| c.is_active() && c.semester() == semester)
            .cloned()
            .collect())
    }

    /// Number of active courses
    pub fn count(&self) -> CcrmResult<usize> {
        Ok(self.read()?.iter().filter(|c| c.is_active()).count())
    }

    /// Whether an active course uses this code
    pub fn exists(&self, code: &CourseCode) -> CcrmResult<bool> {
        Ok(self.get_by_code(code)?.is_some())
    }
}
