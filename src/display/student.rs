//! Student display formatting
//!
//! Formats students for terminal output in table and detail views.

use crate::models::{Course, Instructor, Student};
use crate::services::calculate_gpa;

/// Format a list of students as a table
pub fn format_student_list(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students found.".to_string();
    }

    let id_width = column_width(students.iter().map(|s| s.id().len()), 2);
    let reg_width = column_width(students.iter().map(|s| s.reg_no.len()), 6);
    let name_width = column_width(students.iter().map(|s| s.name().chars().count()), 4);
    let email_width = column_width(students.iter().map(|s| s.email().len()), 5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<reg_width$}  {:<name_width$}  {:<email_width$}  {:>7}  {:>5}\n",
        "ID", "Reg No", "Name", "Email", "Courses", "GPA",
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<reg_width$}  {:-<name_width$}  {:-<email_width$}  {:->7}  {:->5}\n",
        "", "", "", "", "", "",
    ));

    for s in students {
        output.push_str(&format!(
            "{:<id_width$}  {:<reg_width$}  {:<name_width$}  {:<email_width$}  {:>7}  {:>5.2}\n",
            s.id(),
            s.reg_no,
            s.name(),
            s.email(),
            s.enrollments().len(),
            calculate_gpa(s),
        ));
    }

    output.push_str(&format!("\n{} student(s)\n", students.len()));
    output
}

/// Format a single student's details, including current enrollments
pub fn format_student_details(
    student: &Student,
    courses: &[Course],
    instructors: &[Instructor],
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Student: {}\n", student.name()));
    output.push_str(&format!("  ID:             {}\n", student.id()));
    output.push_str(&format!("  Reg No:         {}\n", student.reg_no));
    output.push_str(&format!("  Email:          {}\n", student.email()));
    output.push_str(&format!(
        "  Status:         {}\n",
        if student.is_active() { "Active" } else { "Inactive" }
    ));
    output.push_str(&format!(
        "  Created:        {}\n",
        student.person.date_created()
    ));
    output.push_str(&format!("  Credits:        {}\n", student.total_credits()));
    output.push_str(&format!("  GPA:            {:.2}\n", calculate_gpa(student)));

    if student.enrollments().is_empty() {
        output.push_str("\n  Not enrolled in any courses.\n");
        return output;
    }

    output.push_str("\n  Enrollments:\n");
    for e in student.enrollments() {
        let described = Course::find(courses, e.course_code())
            .map(|c| c.describe(instructors))
            .unwrap_or_else(|| e.course_code().to_string());
        let grade = e
            .grade()
            .map(|g| g.to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "    {}  [{}]  enrolled {}\n",
            described,
            grade,
            e.enrollment_date()
        ));
    }

    output
}

fn column_width<I: Iterator<Item = usize>>(lengths: I, header: usize) -> usize {
    lengths.max().unwrap_or(header).max(header)
}
