//! Course and instructor display formatting

use crate::models::{Course, DisplayInfo, Instructor};

/// Format a list of courses as a table
pub fn format_course_list(courses: &[Course], instructors: &[Instructor]) -> String {
    if courses.is_empty() {
        return "No courses found.".to_string();
    }

    let code_width = courses
        .iter()
        .map(|c| c.code().as_str().len())
        .max()
        .unwrap_or(4)
        .max(4);
    let title_width = courses
        .iter()
        .map(|c| c.title().chars().count())
        .max()
        .unwrap_or(5)
        .max(5);
    let dept_width = courses
        .iter()
        .map(|c| c.department().chars().count())
        .max()
        .unwrap_or(10)
        .max(10);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<code_width$}  {:<title_width$}  {:>3}  {:<8}  {:<dept_width$}  {}\n",
        "Code", "Title", "Cr", "Semester", "Department", "Instructor",
    ));
    output.push_str(&format!(
        "{:-<code_width$}  {:-<title_width$}  {:->3}  {:-<8}  {:-<dept_width$}  {:-<10}\n",
        "", "", "", "", "", "",
    ));

    for c in courses {
        let instructor = c
            .instructor(instructors)
            .map(|i| i.name().to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<code_width$}  {:<title_width$}  {:>3}  {:<8}  {:<dept_width$}  {}\n",
            c.code(),
            c.title(),
            c.credits(),
            c.semester(),
            c.department(),
            instructor,
        ));
    }

    output.push_str(&format!("\n{} course(s)\n", courses.len()));
    output
}

/// Format a single course's details
pub fn format_course_details(course: &Course, instructors: &[Instructor]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Course: {}\n", course.short_info()));
    output.push_str(&format!("  Credits:        {}\n", course.credits()));
    output.push_str(&format!("  Semester:       {}\n", course.semester()));
    output.push_str(&format!("  Department:     {}\n", course.department()));
    output.push_str(&format!(
        "  Instructor:     {}\n",
        course
            .instructor(instructors)
            .map(|i| i.to_string())
            .unwrap_or_else(|| "No instructor".to_string())
    ));
    output.push_str(&format!(
        "  Status:         {}\n",
        if course.is_active() { "Active" } else { "Inactive" }
    ));

    output
}

/// Format the instructor roster
pub fn format_instructor_list(instructors: &[Instructor]) -> String {
    if instructors.is_empty() {
        return "No instructors configured.".to_string();
    }

    let id_width = instructors
        .iter()
        .map(|i| i.id().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut output = String::new();
    for i in instructors {
        output.push_str(&format!(
            "{:<id_width$}  {}  <{}>\n",
            i.id(),
            i.display_info(),
            i.person.email,
        ));
    }
    output
}
