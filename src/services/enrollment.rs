//! Enrollment engine
//!
//! Admission control for enrollments (duplicate and per-semester credit
//! checks), grade assignment, and GPA aggregation. These functions work on a
//! `Student` value directly; `StudentStore` wraps them under its write lock
//! for stored students.

use tracing::debug;

use crate::error::{CcrmError, CcrmResult};
use crate::models::{Course, Enrollment, Grade, Student};

/// Maximum credits a student may hold in a single semester
pub const MAX_CREDITS_PER_SEMESTER: u32 = 18;

/// Enroll a student in a course
///
/// Fails with `DuplicateEnrollment` if the student already holds this
/// (course code, semester) pair, or with `CreditLimitExceeded` if the
/// semester's credits would pass the limit. On failure the student is left
/// untouched.
pub fn enroll(student: &mut Student, course: &Course) -> CcrmResult<Enrollment> {
    let enrollment = Enrollment::new(student.id(), course);
    admit(student, enrollment)
}

/// Run an existing enrollment record through admission control
///
/// Same checks as [`enroll`], keyed by the record's own course code,
/// semester and credits. Used when merging enrollments from outside files.
pub fn admit(student: &mut Student, enrollment: Enrollment) -> CcrmResult<Enrollment> {
    let semester = enrollment.semester();
    if student.is_enrolled_in(enrollment.course_code(), semester) {
        return Err(CcrmError::DuplicateEnrollment {
            student: student.reg_no.clone(),
            course: enrollment.course_code().to_string(),
            semester,
        });
    }

    let current = student.credits_in(semester);
    let adding = enrollment.credits();
    let total = match current.checked_add(adding) {
        Some(total) if total <= MAX_CREDITS_PER_SEMESTER => total,
        _ => {
            return Err(CcrmError::CreditLimitExceeded {
                current,
                adding,
                max: MAX_CREDITS_PER_SEMESTER,
            })
        }
    };

    student.push_enrollment(enrollment.clone());

    debug!(
        student = %student.reg_no,
        course = %enrollment.course_code(),
        semester = %semester,
        credits = total,
        "enrolled"
    );

    Ok(enrollment)
}

/// Drop every enrollment for the course's (code, semester); returns how many
pub fn unenroll(student: &mut Student, course: &Course) -> usize {
    student.remove_enrollments(course.code(), course.semester())
}

/// Overwrite an enrollment's grade
pub fn assign_grade(enrollment: &mut Enrollment, grade: Grade) {
    enrollment.set_grade(grade);
}

/// Credit-weighted GPA over graded enrollments; 0.0 when nothing is graded
pub fn calculate_gpa(student: &Student) -> f64 {
    let (points, credits) = student
        .enrollments()
        .iter()
        .filter_map(|e| e.grade().map(|g| (g.points(), e.credits())))
        .fold((0.0, 0u64), |(points, credits), (p, c)| {
            (points + p * c as f64, credits + u64::from(c))
        });

    if credits == 0 {
        0.0
    } else {
        points / credits as f64
    }
}
