//! Row codecs for the CSV data files
//!
//! Each record kind maps to one flat row:
//!
//! - student: `id,regNo,fullName,email,active,dateCreated`
//! - course: `code,title,credits,instructorId,semester,department,active`
//! - enrollment: `studentId,courseCode,semester,credits,enrollmentDate,grade`
//!
//! Fields are not escaped, so values must not contain commas. Extra trailing
//! fields are ignored on decode.

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{CcrmError, FieldError};
use crate::models::{Course, CourseCode, Enrollment, Grade, Instructor, Person, Semester, Student};

pub const STUDENT_FIELDS: usize = 6;
pub const COURSE_FIELDS: usize = 7;
pub const ENROLLMENT_FIELDS: usize = 6;

/// Encode a student row
pub fn student_to_record(student: &Student) -> Vec<String> {
    vec![
        student.id().to_string(),
        student.reg_no.clone(),
        student.name().to_string(),
        student.email().to_string(),
        student.is_active().to_string(),
        student.person.date_created().to_string(),
    ]
}

/// Decode a student row; enrollments are attached separately
pub fn student_from_record(record: &StringRecord) -> Result<Student, FieldError> {
    require_fields(record, STUDENT_FIELDS)?;

    let person = Person::restore(
        &record[0],
        &record[2],
        &record[3],
        parse_date(&record[5])?,
        parse_bool(&record[4]),
    );
    Ok(Student::from_person(person, &record[1]))
}

/// Encode a course row; an unassigned instructor is an empty field
pub fn course_to_record(course: &Course) -> Vec<String> {
    vec![
        course.code().to_string(),
        course.title().to_string(),
        course.credits().to_string(),
        course.instructor_id().unwrap_or_default().to_string(),
        course.semester().code().to_string(),
        course.department().to_string(),
        course.is_active().to_string(),
    ]
}

/// Decode a course row
///
/// The instructor id is kept only when it names someone in `instructors`;
/// an unknown id leaves the course without an instructor.
pub fn course_from_record(
    record: &StringRecord,
    instructors: &[Instructor],
) -> Result<Course, FieldError> {
    require_fields(record, COURSE_FIELDS)?;

    let code = parse_code(&record[0])?;
    let credits = parse_u32("credits", &record[2])?;
    let semester = parse_semester(&record[4])?;
    let instructor = Instructor::find(instructors, &record[3]).map(|i| i.id().to_string());

    let mut course = Course::builder()
        .code(code)
        .title(&record[1])
        .credits(credits)
        .instructor(instructor)
        .semester(semester)
        .department(&record[5])
        .build()
        .map_err(construction)?;
    course.set_active(parse_bool(&record[6]));

    Ok(course)
}

/// Encode an enrollment row; an ungraded enrollment has an empty grade field
pub fn enrollment_to_record(enrollment: &Enrollment) -> Vec<String> {
    vec![
        enrollment.student_id().to_string(),
        enrollment.course_code().to_string(),
        enrollment.semester().code().to_string(),
        enrollment.credits().to_string(),
        enrollment.enrollment_date().to_string(),
        enrollment
            .grade()
            .map(|g| g.letter().to_string())
            .unwrap_or_default(),
    ]
}

/// Decode an enrollment row
pub fn enrollment_from_record(record: &StringRecord) -> Result<Enrollment, FieldError> {
    require_fields(record, ENROLLMENT_FIELDS)?;

    let grade = match record[5].trim() {
        "" => None,
        letter => Some(Grade::parse(letter).ok_or_else(|| FieldError::InvalidGrade(letter.into()))?),
    };

    Ok(Enrollment::restore(
        &record[0],
        parse_code(&record[1])?,
        parse_semester(&record[2])?,
        parse_u32("credits", &record[3])?,
        parse_date(&record[4])?,
        grade,
    ))
}

fn require_fields(record: &StringRecord, expected: usize) -> Result<(), FieldError> {
    if record.len() < expected {
        return Err(FieldError::TooFewFields {
            expected,
            found: record.len(),
        });
    }
    Ok(())
}

/// Anything other than a case-insensitive "true" reads as false
fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn parse_u32(field: &'static str, value: &str) -> Result<u32, FieldError> {
    value
        .trim()
        .parse()
        .map_err(|_| FieldError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

fn parse_date(value: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FieldError::InvalidDate(value.to_string()))
}

fn parse_semester(value: &str) -> Result<Semester, FieldError> {
    Semester::parse(value).ok_or_else(|| FieldError::InvalidSemester(value.to_string()))
}

fn parse_code(value: &str) -> Result<CourseCode, FieldError> {
    CourseCode::parse(value).map_err(|e| FieldError::InvalidCourseCode(e.to_string()))
}

fn construction(err: CcrmError) -> FieldError {
    match err {
        CcrmError::Construction(msg) => FieldError::Construction(msg),
        other => FieldError::Construction(other.to_string()),
    }
}
