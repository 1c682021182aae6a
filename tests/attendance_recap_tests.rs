use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_and_login, run, setup_test_db, temp_out};

#[test]
fn test_submit_attendance_with_overrides() {
    let db_path = setup_test_db("attendance_submit");
    init_and_login(&db_path);

    run(
        &db_path,
        &[
            "attendance", "submit", "--class", "2", "--date", "2024-03-04", "--set", "4=S",
            "--set", "7=alpa",
        ],
    )
    .success()
    .stdout(contains("Attendance saved for 6 students"));

    run(&db_path, &["attendance", "list", "--date", "2024-03-04", "--class", "2"])
        .success()
        .stdout(contains("Nurdi"))
        .stdout(contains("Ani"))
        // Andi left the school and is not on the roster
        .stdout(contains("Andi").not());
}

#[test]
fn test_submit_attendance_rejects_foreign_student() {
    let db_path = setup_test_db("attendance_foreign_student");
    init_and_login(&db_path);

    run(
        &db_path,
        &["attendance", "submit", "--class", "1", "--date", "2024-03-04", "--set", "2=H"],
    )
    .failure()
    .stderr(contains("not an active member"));

    run(
        &db_path,
        &["attendance", "submit", "--class", "1", "--set", "8=X"],
    )
    .failure()
    .stderr(contains("H, S, I, A"));
}

#[test]
fn test_resubmit_updates_instead_of_duplicating() {
    let db_path = setup_test_db("attendance_resubmit");
    init_and_login(&db_path);
    let out = temp_out("attendance_resubmit", "csv");

    run(
        &db_path,
        &["attendance", "submit", "--class", "1", "--date", "2024-03-04"],
    )
    .success();
    run(
        &db_path,
        &["attendance", "submit", "--class", "1", "--date", "2024-03-04", "--set", "8=S"],
    )
    .success();

    run(
        &db_path,
        &["recap", "students", "--class", "1", "--range", "2024-03", "--file", &out],
    )
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("No,NISN,Nama Siswa,Kelas,Hadir,Sakit,Izin,Alpa"));
    assert!(content.contains("1,008,Siti,X Rekayasa Perangkat Lunak,0,1,0,0"));
}

#[test]
fn test_teacher_recap_json_export() {
    let db_path = setup_test_db("recap_teacher_json");
    init_and_login(&db_path);
    let out = temp_out("recap_teacher_json", "json");

    run(
        &db_path,
        &[
            "attendance", "teacher-log", "--teacher", "1", "--subject", "1", "--class", "1",
            "--date", "2024-03-04", "--meetings", "4",
        ],
    )
    .success();

    // 8 meetings/week over 21 weekdays of March 2024: round(8 / 5 * 21) = 34
    run(
        &db_path,
        &[
            "recap", "teachers", "--teacher", "1", "--range", "2024-03", "--format", "json",
            "--file", &out,
        ],
    )
    .success()
    .stdout(contains("Budi Santoso"))
    .stdout(contains("11.76"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows[0]["name"], "Budi Santoso");
    assert_eq!(rows[0]["expected"], 34);
    assert_eq!(rows[0]["attended"], 4);
}

#[test]
fn test_teacher_recap_weekend_range_is_empty() {
    let db_path = setup_test_db("recap_teacher_weekend");
    init_and_login(&db_path);
    let out = temp_out("recap_teacher_weekend", "csv");

    run(
        &db_path,
        &["recap", "teachers", "--range", "2024-03-02:2024-03-03", "--file", &out],
    )
    .success()
    .stdout(contains("No working days in the selected range."));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_recap_xlsx_export_creates_file() {
    let db_path = setup_test_db("recap_students_xlsx");
    init_and_login(&db_path);
    let out = temp_out("recap_students_xlsx", "xlsx");

    run(
        &db_path,
        &["recap", "students", "--range", "2024", "--file", &out],
    )
    .success()
    .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_recap_invalid_range() {
    let db_path = setup_test_db("recap_invalid_range");
    init_and_login(&db_path);

    run(&db_path, &["recap", "students", "--range", "2024-03:2024"])
        .failure()
        .stderr(contains("same format"));
}
