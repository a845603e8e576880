use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ccrm(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ccrm").unwrap();
    cmd.env("CCRM_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn add_student(dir: &TempDir, reg_no: &str, name: &str) {
    ccrm(dir)
        .args(["student", "add", reg_no, name, "student@example.edu"])
        .assert()
        .success();
}

fn add_course(dir: &TempDir, code: &str, credits: &str) {
    ccrm(dir)
        .args([
            "course", "add", code, "Some Course", "--credits", credits, "--semester", "fall",
        ])
        .assert()
        .success();
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    ccrm(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Campus Course & Records Manager"));
}

#[test]
fn test_init_writes_config() {
    let dir = TempDir::new().unwrap();
    ccrm(&dir).arg("init").assert().success();

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("students.csv").exists());
}

#[test]
fn test_student_add_and_list() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "R2024001", "Ada Lovelace");

    ccrm(&dir)
        .args(["student", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("1 student(s)"));

    ccrm(&dir)
        .args(["student", "add", "R2024001", "Someone Else", "x@example.edu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_duplicate_enrollment_is_rejected() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "R1", "Ada Lovelace");
    add_course(&dir, "CS-101", "3");

    ccrm(&dir)
        .args(["student", "enroll", "R1", "CS-101"])
        .assert()
        .success();

    ccrm(&dir)
        .args(["student", "enroll", "R1", "cs-101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already enrolled"));
}

#[test]
fn test_credit_limit() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "R1", "Ada Lovelace");
    add_course(&dir, "CS-101", "6");
    add_course(&dir, "CS-102", "6");
    add_course(&dir, "CS-103", "6");
    add_course(&dir, "CS-104", "1");

    for code in ["CS-101", "CS-102", "CS-103"] {
        ccrm(&dir)
            .args(["student", "enroll", "R1", code])
            .assert()
            .success();
    }

    ccrm(&dir)
        .args(["student", "enroll", "R1", "CS-104"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Credit limit exceeded: 18 + 1 > 18"));
}

#[test]
fn test_grade_and_transcript() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "R1", "Ada Lovelace");
    add_course(&dir, "CS-101", "4");
    add_course(&dir, "MA-201", "3");

    ccrm(&dir)
        .args(["student", "enroll", "R1", "CS-101"])
        .assert()
        .success();
    ccrm(&dir)
        .args(["student", "enroll", "R1", "MA-201"])
        .assert()
        .success();
    ccrm(&dir)
        .args(["student", "grade", "R1", "CS-101", "A"])
        .assert()
        .success();

    ccrm(&dir)
        .args(["student", "transcript", "R1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== TRANSCRIPT ==="))
        .stdout(predicate::str::contains("GPA:  9.00"))
        .stdout(predicate::str::contains("A (9.0)"))
        .stdout(predicate::str::contains("No grade"));
}

#[test]
fn test_unknown_student_fails() {
    let dir = TempDir::new().unwrap();
    ccrm(&dir)
        .args(["student", "transcript", "NOPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student not found: NOPE"));
}

#[test]
fn test_backup_create_and_size() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "R1", "Ada Lovelace");

    ccrm(&dir)
        .args(["backup", "create", "nightly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created: nightly"));
    assert!(dir
        .path()
        .join("backups")
        .join("nightly")
        .join("students.csv")
        .exists());

    ccrm(&dir)
        .args(["backup", "size", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 bytes)"));

    ccrm(&dir)
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nightly"));
}

#[test]
fn test_export_then_import_elsewhere() {
    let source = TempDir::new().unwrap();
    add_student(&source, "R1", "Ada Lovelace");
    add_course(&source, "CS-101", "3");
    ccrm(&source)
        .args(["student", "enroll", "R1", "CS-101"])
        .assert()
        .success();

    ccrm(&source)
        .args(["data", "export", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 record(s) to enrollments.csv"));

    let target = TempDir::new().unwrap();
    let target_data = target.path().join("data");
    fs::create_dir_all(&target_data).unwrap();
    for name in ["students.csv", "courses.csv", "enrollments.csv"] {
        fs::copy(source.path().join("data").join(name), target_data.join(name)).unwrap();
    }

    ccrm(&target)
        .args(["student", "show", "R1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CS-101"));
}

#[test]
fn test_import_reports_bad_line() {
    let dir = TempDir::new().unwrap();
    ccrm(&dir).arg("init").assert().success();
    fs::write(
        dir.path().join("data").join("extra.csv"),
        "S9,R9,Bob,bob@example.edu,true,2024-01-15\nnot,enough\n",
    )
    .unwrap();

    ccrm(&dir)
        .args(["data", "import", "students", "--file", "extra.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad line 2"));
}

#[test]
fn test_gpa_report() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "R1", "Ada Lovelace");

    ccrm(&dir)
        .args(["report", "gpa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No GPA"));
}
