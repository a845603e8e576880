//! Student store
//!
//! In-memory student collection kept in insertion order. Deactivated students
//! stay in the collection but are hidden from every default query. One
//! `RwLock` guards the whole collection, and each enrollment mutation holds
//! the write lock from its admission check through its insert.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{CcrmError, CcrmResult};
use crate::models::{Course, CourseCode, Enrollment, Grade, Semester, Student};
use crate::services::enrollment;

/// Store for student records
#[derive(Default)]
pub struct StudentStore {
    data: RwLock<Vec<Student>>,
}

impl StudentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CcrmResult<RwLockReadGuard<'_, Vec<Student>>> {
        self.data
            .read()
            .map_err(|e| CcrmError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> CcrmResult<RwLockWriteGuard<'_, Vec<Student>>> {
        self.data
            .write()
            .map_err(|e| CcrmError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Append a student; uniqueness is the caller's concern
    pub fn add(&self, student: Student) -> CcrmResult<()> {
        self.write()?.push(student);
        Ok(())
    }

    /// Replace the whole collection
    pub fn replace_all(&self, students: Vec<Student>) -> CcrmResult<()> {
        *self.write()? = students;
        Ok(())
    }

    /// First active student with this id
    pub fn get_by_id(&self, id: &str) -> CcrmResult<Option<Student>> {
        Ok(self
            .read()?
            .iter()
            .find(|s| s.is_active() && s.id() == id)
            .cloned())
    }

    /// First active student with this registration number
    pub fn get_by_reg_no(&self, reg_no: &str) -> CcrmResult<Option<Student>> {
        Ok(self
            .read()?
            .iter()
            .find(|s| s.is_active() && s.reg_no == reg_no)
            .cloned())
    }

    /// Active students in insertion order
    pub fn list(&self) -> CcrmResult<Vec<Student>> {
        Ok(self
            .read()?
            .iter()
            .filter(|s| s.is_active())
            .cloned()
            .collect())
    }

    /// Every student, including deactivated ones
    pub fn list_all(&self) -> CcrmResult<Vec<Student>> {
        Ok(self.read()?.clone())
    }

    /// Remove any student with the same id, then append this one
    pub fn update(&self, student: Student) -> CcrmResult<()> {
        let mut data = self.write()?;
        data.retain(|s| s.id() != student.id());
        data.push(student);
        Ok(())
    }

    /// Soft-delete the active student with this id; returns whether one matched
    pub fn deactivate(&self, id: &str) -> CcrmResult<bool> {
        let mut data = self.write()?;
        match data.iter_mut().find(|s| s.is_active() && s.id() == id) {
            Some(student) => {
                student.person.deactivate();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Case-insensitive substring search over name, reg no and email
    pub fn search(&self, term: &str) -> CcrmResult<Vec<Student>> {
        let term = term.to_lowercase();
        Ok(self
            .read()?
            .iter()
            .filter(|s| {
                s.is_active()
                    && (s.name().to_lowercase().contains(&term)
                        || s.reg_no.to_lowercase().contains(&term)
                        || s.email().to_lowercase().contains(&term))
            })
            .cloned()
            .collect())
    }

    /// Number of active students
    pub fn count(&self) -> CcrmResult<usize> {
        Ok(self.read()?.iter().filter(|s| s.is_active()).count())
    }

    /// Whether an active student holds this registration number
    pub fn exists(&self, reg_no: &str) -> CcrmResult<bool> {
        Ok(self.get_by_reg_no(reg_no)?.is_some())
    }

    /// Active students whose GPA is at least `min_gpa`
    pub fn with_min_gpa(&self, min_gpa: f64) -> CcrmResult<Vec<Student>> {
        Ok(self
            .read()?
            .iter()
            .filter(|s| s.is_active() && enrollment::calculate_gpa(s) >= min_gpa)
            .cloned()
            .collect())
    }

    /// Enroll a stored student in a course
    pub fn enroll(&self, student_id: &str, course: &Course) -> CcrmResult<Enrollment> {
        let mut data = self.write()?;
        let student = find_active_mut(&mut data, student_id)?;
        enrollment::enroll(student, course)
    }

    /// Drop a stored student's enrollments in a course offering
    pub fn unenroll(&self, student_id: &str, course: &Course) -> CcrmResult<usize> {
        let mut data = self.write()?;
        let student = find_active_mut(&mut data, student_id)?;
        Ok(enrollment::unenroll(student, course))
    }

    /// Grade a stored student's enrollment
    pub fn assign_grade(
        &self,
        student_id: &str,
        code: &CourseCode,
        semester: Semester,
        grade: Grade,
    ) -> CcrmResult<Enrollment> {
        let mut data = self.write()?;
        let student = find_active_mut(&mut data, student_id)?;
        let found = student.enrollment_mut(code, semester).ok_or_else(|| {
            CcrmError::enrollment_not_found(format!("{} {} ({})", student_id, code, semester))
        })?;
        enrollment::assign_grade(found, grade);
        Ok(found.clone())
    }

    /// GPA of a stored student
    pub fn gpa(&self, student_id: &str) -> CcrmResult<f64> {
        let student = self
            .get_by_id(student_id)?
            .ok_or_else(|| CcrmError::student_not_found(student_id))?;
        Ok(enrollment::calculate_gpa(&student))
    }

    /// Attach persisted enrollments to their students by id
    ///
    /// Returns the enrollments that were not attached: their student is not
    /// in the store, or already holds the same (course, semester) pair.
    pub fn attach_enrollments(&self, enrollments: Vec<Enrollment>) -> CcrmResult<Vec<Enrollment>> {
        let mut data = self.write()?;
        let mut rejected = Vec::new();
        for e in enrollments {
            match data.iter_mut().find(|s| s.id() == e.student_id()) {
                Some(student) if !student.is_enrolled_in(e.course_code(), e.semester()) => {
                    student.push_enrollment(e)
                }
                _ => rejected.push(e),
            }
        }
        Ok(rejected)
    }

    /// Merge enrollments from an outside file into active students
    ///
    /// Each record goes through the same admission control as `enroll`.
    /// Returns the records that were not merged: no active student with
    /// that id, a duplicate offering, or one that would pass the credit
    /// limit.
    pub fn merge_enrollments(&self, enrollments: Vec<Enrollment>) -> CcrmResult<Vec<Enrollment>> {
        let mut data = self.write()?;
        let mut rejected = Vec::new();
        for e in enrollments {
            let Ok(student) = find_active_mut(&mut data, e.student_id()) else {
                rejected.push(e);
                continue;
            };
            if let Err(err) = enrollment::admit(student, e.clone()) {
                debug!(student = e.student_id(), course = %e.course_code(), "{}", err);
                rejected.push(e);
            }
        }
        Ok(rejected)
    }
}

fn find_active_mut<'a>(data: &'a mut [Student], id: &str) -> CcrmResult<&'a mut Student> {
    data.iter_mut()
        .find(|s| s.is_active() && s.id() == id)
        .ok_or_else(|| CcrmError::student_not_found(id))
}
