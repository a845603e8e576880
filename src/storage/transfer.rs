//! CSV import and export of the data files
//!
//! Export overwrites `<data_dir>/<file>` atomically. Import is all-or-nothing:
//! a missing file or the first unparseable line aborts it, and nothing is
//! returned. Blank lines are skipped.

use std::fs;

use csv::StringRecord;
use tracing::info;

use super::codec;
use super::file_io::{csv_reader, is_blank, line_at, write_csv_atomic};
use crate::config::paths::CcrmPaths;
use crate::error::{CcrmError, CcrmResult, FieldError};
use crate::models::{Course, Enrollment, Instructor, Student};

/// Moves record collections between memory and the data directory
pub struct Transfer<'a> {
    paths: &'a CcrmPaths,
}

impl<'a> Transfer<'a> {
    pub fn new(paths: &'a CcrmPaths) -> Self {
        Self { paths }
    }

    /// Write students, including inactive ones, to `file`
    pub fn export_students(&self, students: &[Student], file: &str) -> CcrmResult<usize> {
        self.export(file, students.iter().map(codec::student_to_record))
    }

    /// Read students from `file`, without enrollments
    pub fn import_students(&self, file: &str) -> CcrmResult<Vec<Student>> {
        self.import(file, codec::student_from_record)
    }

    /// Write courses to `file`
    pub fn export_courses(&self, courses: &[Course], file: &str) -> CcrmResult<usize> {
        self.export(file, courses.iter().map(codec::course_to_record))
    }

    /// Read courses from `file`, resolving instructor ids against `instructors`
    pub fn import_courses(&self, file: &str, instructors: &[Instructor]) -> CcrmResult<Vec<Course>> {
        self.import(file, |record| codec::course_from_record(record, instructors))
    }

    /// Write every enrollment held by `students` to `file`
    pub fn export_enrollments(&self, students: &[Student], file: &str) -> CcrmResult<usize> {
        self.export(
            file,
            students
                .iter()
                .flat_map(|s| s.enrollments())
                .map(codec::enrollment_to_record),
        )
    }

    /// Read enrollments from `file`
    pub fn import_enrollments(&self, file: &str) -> CcrmResult<Vec<Enrollment>> {
        self.import(file, codec::enrollment_from_record)
    }

    fn export<I>(&self, file: &str, records: I) -> CcrmResult<usize>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let path = self.paths.data_file(file);
        let count = write_csv_atomic(&path, records)
            .map_err(|e| CcrmError::Export(format!("{}: {}", file, e)))?;

        info!(file, records = count, "exported");
        Ok(count)
    }

    fn import<T, F>(&self, file: &str, decode: F) -> CcrmResult<Vec<T>>
    where
        F: Fn(&StringRecord) -> Result<T, FieldError>,
    {
        let path = self.paths.data_file(file);
        if !path.exists() {
            return Err(CcrmError::import_file_missing(file));
        }

        let contents = fs::read(&path)
            .map_err(|e| CcrmError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
        let mut reader = csv_reader(contents.as_slice());
        let mut items = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|e| {
                let line = e.position().map_or(1, |p| line_at(&contents, p.byte()));
                CcrmError::bad_line(file, line, FieldError::Malformed(e.to_string()))
            })?;

            if is_blank(&record) {
                continue;
            }

            let item = decode(&record).map_err(|source| {
                let line = record.position().map_or(1, |p| line_at(&contents, p.byte()));
                CcrmError::bad_line(file, line, source)
            })?;
            items.push(item);
        }

        info!(file, records = items.len(), "imported");
        Ok(items)
    }
}
