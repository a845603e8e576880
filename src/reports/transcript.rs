//! Student transcript
//!
//! One row per enrollment in enrollment order. Course title and instructor
//! are looked up when the transcript is generated, so they reflect the
//! current course records rather than the ones at enrollment time.

use crate::error::{CcrmError, CcrmResult};
use crate::models::{Course, Grade, Instructor, Semester, Student};
use crate::services::calculate_gpa;
use crate::storage::Storage;

/// A single course line on a transcript
#[derive(Debug, Clone)]
pub struct TranscriptRow {
    pub code: String,
    /// Course title, or a placeholder when the course record is gone
    pub title: String,
    pub instructor: Option<String>,
    pub semester: Semester,
    pub credits: u32,
    pub grade: Option<Grade>,
}

impl TranscriptRow {
    /// Grade as "A (9.0)", or "No grade"
    pub fn grade_display(&self) -> String {
        match self.grade {
            Some(g) => format!("{} ({:.1})", g.letter(), g.points()),
            None => "No grade".to_string(),
        }
    }
}

/// Transcript for one student
#[derive(Debug, Clone)]
pub struct Transcript {
    pub name: String,
    pub reg_no: String,
    pub gpa: f64,
    pub rows: Vec<TranscriptRow>,
}

impl Transcript {
    /// Generate the transcript of the active student with this registration number
    pub fn generate(storage: &Storage, reg_no: &str) -> CcrmResult<Self> {
        let student = storage
            .students
            .get_by_reg_no(reg_no)?
            .ok_or_else(|| CcrmError::student_not_found(reg_no))?;
        let courses = storage.courses.list_all()?;

        Ok(Self::build(&student, &courses, storage.instructors()))
    }

    /// Build a transcript from already-loaded records
    pub fn build(student: &Student, courses: &[Course], instructors: &[Instructor]) -> Self {
        let rows = student
            .enrollments()
            .iter()
            .map(|e| {
                let course = Course::find(courses, e.course_code());
                TranscriptRow {
                    code: e.course_code().to_string(),
                    title: course
                        .map(|c| c.title().to_string())
                        .unwrap_or_else(|| "(unknown course)".to_string()),
                    instructor: course
                        .and_then(|c| c.instructor(instructors))
                        .map(|i| i.name().to_string()),
                    semester: e.semester(),
                    credits: e.credits(),
                    grade: e.grade(),
                }
            })
            .collect();

        Self {
            name: student.name().to_string(),
            reg_no: student.reg_no.clone(),
            gpa: calculate_gpa(student),
            rows,
        }
    }

    /// Total credits across all rows
    pub fn total_credits(&self) -> u32 {
        self.rows.iter().map(|r| r.credits).sum()
    }

    /// Format the transcript for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("=== TRANSCRIPT ===\n");
        output.push_str(&format!("Name: {}\n", self.name));
        output.push_str(&format!("Reg:  {}\n", self.reg_no));
        output.push_str(&format!("GPA:  {:.2}\n\n", self.gpa));

        if self.rows.is_empty() {
            output.push_str("No courses yet.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<10} {:<28} {:<20} {:<8} {:>3}  {}\n",
            "Code", "Title", "Instructor", "Semester", "Cr", "Grade"
        ));
        output.push_str(&"-".repeat(84));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<10} {:<28} {:<20} {:<8} {:>3}  {}\n",
                row.code,
                truncate(&row.title, 28),
                truncate(row.instructor.as_deref().unwrap_or("-"), 20),
                row.semester,
                row.credits,
                row.grade_display()
            ));
        }

        output.push_str(&"-".repeat(84));
        output.push('\n');
        output.push_str(&format!(
            "Courses: {}  |  Credits: {}\n",
            self.rows.len(),
            self.total_credits()
        ));

        output
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let cut: String = s.chars().take(width - 3).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}
