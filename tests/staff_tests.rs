use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_and_login, init_empty_and_login, lapkes, run, setup_test_db};

#[test]
fn test_teacher_asn_requires_nip() {
    let db_path = setup_test_db("staff_asn_nip");
    init_and_login(&db_path);

    run(
        &db_path,
        &["teacher", "add", "--name", "Dewi", "--gender", "P", "--status", "ASN"],
    )
    .failure()
    .stderr(contains("NIP is required for ASN teachers"));

    run(
        &db_path,
        &[
            "teacher", "add", "--name", "Dewi", "--gender", "P", "--status", "ASN", "--nip",
            "199001012020012001",
        ],
    )
    .success()
    .stdout(contains("Teacher added (id 4)."));
}

#[test]
fn test_teacher_non_asn_drops_nip() {
    let db_path = setup_test_db("staff_non_asn");
    init_empty_and_login(&db_path);

    run(
        &db_path,
        &[
            "teacher", "add", "--name", "Eko", "--gender", "Laki-Laki", "--status", "NON-ASN",
            "--nip", "123",
        ],
    )
    .success()
    .stdout(contains("Teacher added (id 1)."));

    run(&db_path, &["teacher", "list"])
        .success()
        .stdout(contains("Eko"))
        .stdout(contains("NON-ASN"))
        .stdout(contains("123").not());
}

#[test]
fn test_invalid_gender_lists_allowed_values() {
    let db_path = setup_test_db("staff_invalid_gender");
    init_and_login(&db_path);

    run(
        &db_path,
        &["teacher", "add", "--name", "X", "--gender", "Robot", "--status", "NON-ASN"],
    )
    .failure()
    .stderr(contains("Laki-Laki, Perempuan"));
}

#[test]
fn test_class_requires_existing_homeroom() {
    let db_path = setup_test_db("staff_class_homeroom");
    init_and_login(&db_path);

    run(
        &db_path,
        &["class", "add", "--code", "XII-A", "--name", "XII A", "--homeroom", "99"],
    )
    .failure()
    .stderr(contains("not found"));

    run(
        &db_path,
        &["class", "add", "--code", "XII-A", "--name", "XII A", "--homeroom", "3"],
    )
    .success()
    .stdout(contains("Class added (id 3)."));

    run(&db_path, &["class", "list"])
        .success()
        .stdout(contains("XII A"))
        .stdout(contains("Agus Wijaya"));
}

#[test]
fn test_delete_teacher_with_yes() {
    let db_path = setup_test_db("staff_delete_yes");
    init_and_login(&db_path);

    run(&db_path, &["teacher", "del", "3", "--yes"])
        .success()
        .stdout(contains("Teacher 3 deleted."));

    run(&db_path, &["teacher", "list"])
        .success()
        .stdout(contains("Agus Wijaya").not());
}

#[test]
fn test_delete_cancelled_without_confirmation() {
    let db_path = setup_test_db("staff_delete_cancel");
    init_and_login(&db_path);

    lapkes()
        .args(["--db", &db_path, "--test", "subject", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Deletion cancelled."));

    run(&db_path, &["subject", "list"])
        .success()
        .stdout(contains("Matematika"));
}

#[test]
fn test_assignment_list_filtered_by_teacher() {
    let db_path = setup_test_db("staff_assignment_filter");
    init_and_login(&db_path);

    run(&db_path, &["assignment", "list", "--teacher", "3"])
        .success()
        .stdout(contains("Biologi"))
        .stdout(contains("Matematika").not());

    run(
        &db_path,
        &["assignment", "add", "--teacher", "3", "--subject", "1", "--class", "9", "--meetings", "2"],
    )
    .failure()
    .stderr(contains("not found"));
}
