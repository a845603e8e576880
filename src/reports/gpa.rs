//! GPA distribution across active students

use crate::error::CcrmResult;
use crate::models::Student;
use crate::services::calculate_gpa;
use crate::storage::Storage;

/// Count of active students per GPA band
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpaBreakdown {
    /// GPA >= 9.0
    pub excellent: usize,
    /// 7.5 <= GPA < 9.0
    pub good: usize,
    /// 6.0 <= GPA < 7.5
    pub average: usize,
    /// 0.0 < GPA < 6.0
    pub poor: usize,
    /// No graded credits (GPA exactly 0.0)
    pub none: usize,
}

impl GpaBreakdown {
    /// Generate the breakdown over active students
    pub fn generate(storage: &Storage) -> CcrmResult<Self> {
        Ok(Self::from_students(&storage.students.list()?))
    }

    pub fn from_students(students: &[Student]) -> Self {
        let mut breakdown = Self::default();
        for gpa in students.iter().map(calculate_gpa) {
            breakdown.record(gpa);
        }
        breakdown
    }

    fn record(&mut self, gpa: f64) {
        if gpa >= 9.0 {
            self.excellent += 1;
        } else if gpa >= 7.5 {
            self.good += 1;
        } else if gpa >= 6.0 {
            self.average += 1;
        } else if gpa > 0.0 {
            self.poor += 1;
        } else {
            self.none += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.excellent + self.good + self.average + self.poor + self.none
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("GPA Breakdown:\n");
        output.push_str(&format!("  9.0+     {:>5}\n", self.excellent));
        output.push_str(&format!("  7.5-8.9  {:>5}\n", self.good));
        output.push_str(&format!("  6.0-7.4  {:>5}\n", self.average));
        output.push_str(&format!("  <6.0     {:>5}\n", self.poor));
        output.push_str(&format!("  No GPA   {:>5}\n", self.none));
        output.push_str(&format!("  Total    {:>5}\n", self.total()));
        output
    }
}
