use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_and_login, run, setup_test_db};

fn add_student(db_path: &str, nisn: &str, name: &str) -> assert_cmd::assert::Assert {
    run(
        db_path,
        &[
            "student",
            "add",
            "--nisn",
            nisn,
            "--name",
            name,
            "--gender",
            "P",
            "--entry-date",
            "2024-07-15",
            "--class",
            "1",
        ],
    )
}

#[test]
fn test_student_add_and_search() {
    let db_path = setup_test_db("student_add_search");
    init_and_login(&db_path);

    add_student(&db_path, "0099", "Larasati")
        .success()
        .stdout(contains("Student added (id 9)."));

    run(&db_path, &["student", "list", "--search", "lara"])
        .success()
        .stdout(contains("Larasati"))
        .stdout(contains("Siswa Baru"))
        .stdout(contains("Nina").not());

    run(&db_path, &["student", "list", "--search", "0099"])
        .success()
        .stdout(contains("Larasati"));

    run(&db_path, &["student", "list", "--class", "1"])
        .success()
        .stdout(contains("Siti"))
        .stdout(contains("Larasati"))
        .stdout(contains("Hasan").not());
}

#[test]
fn test_student_duplicate_nisn_rejected() {
    let db_path = setup_test_db("student_duplicate_nisn");
    init_and_login(&db_path);

    add_student(&db_path, "008", "Kembar")
        .failure()
        .stderr(contains("NISN '008' is already registered"));
}

#[test]
fn test_student_invalid_entry_date() {
    let db_path = setup_test_db("student_invalid_date");
    init_and_login(&db_path);

    run(
        &db_path,
        &[
            "student", "add", "--nisn", "0100", "--name", "Tono", "--gender", "L",
            "--entry-date", "15/07/2024", "--class", "1",
        ],
    )
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_student_list_pagination_footer() {
    let db_path = setup_test_db("student_pagination");
    init_and_login(&db_path);

    run(&db_path, &["student", "list", "--page", "7"])
        .success()
        .stdout(contains("Page 1/1 (8 items)"));
}

#[test]
fn test_transfer_marks_student_inactive_and_delete_resets() {
    let db_path = setup_test_db("student_transfer_cycle");
    init_and_login(&db_path);

    run(
        &db_path,
        &[
            "transfer",
            "add",
            "--student",
            "6",
            "--exit-date",
            "2024-10-01",
            "--reason",
            "Keluar",
        ],
    )
    .success()
    .stdout(contains("Nina is now Keluar/Pindah"));

    run(&db_path, &["student", "list", "--search", "Nina"])
        .success()
        .stdout(contains("Keluar/Pindah"))
        .stdout(contains("2024-10-01"));

    run(
        &db_path,
        &[
            "transfer",
            "add",
            "--student",
            "6",
            "--exit-date",
            "2024-10-02",
            "--reason",
            "Keluar",
        ],
    )
    .failure()
    .stderr(contains("has already left the school"));

    run(&db_path, &["transfer", "del", "2", "--yes"])
        .success()
        .stdout(contains("Transfer 2 deleted."));

    run(&db_path, &["student", "list", "--search", "Nina"])
        .success()
        .stdout(contains("Siswa Baru"))
        .stdout(contains("2024-10-01").not());
}

#[test]
fn test_achievement_and_violation_records() {
    let db_path = setup_test_db("student_records");
    init_and_login(&db_path);

    run(
        &db_path,
        &[
            "achievement", "add", "--student", "8", "--name", "Juara Debat", "--level",
            "Provinsi", "--date", "2024-11-02",
        ],
    )
    .success();

    run(&db_path, &["achievement", "list", "--student", "8"])
        .success()
        .stdout(contains("Juara Debat"))
        .stdout(contains("Provinsi"));

    run(
        &db_path,
        &[
            "violation", "add", "--student", "8", "--name", "Bolos", "--level", "Berat",
            "--date", "2024-11-03", "--sanction", "Tidak Ada",
        ],
    )
    .failure()
    .stderr(contains("Peringatan Lisan"));
}
