use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_and_login, run, setup_test_db, temp_out};

#[test]
fn test_backup_plain_copy() {
    let db_path = setup_test_db("backup_plain");
    init_and_login(&db_path);
    let out = temp_out("backup_plain", "sqlite");

    run(&db_path, &["backup", "--file", &out])
        .success()
        .stdout(contains("Backup created"));

    let meta = fs::metadata(&out).expect("backup written");
    assert!(meta.len() > 0);
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_compressed");
    init_and_login(&db_path);
    let out = temp_out("backup_compressed", "sqlite");
    let zip = temp_out("backup_compressed", "zip");

    run(&db_path, &["backup", "--file", &out, "--compress"])
        .success()
        .stdout(contains("Compressed"));

    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_backup_compress_rejects_zip_destination() {
    let db_path = setup_test_db("backup_zip_dest");
    init_and_login(&db_path);
    let zip = temp_out("backup_zip_dest", "zip");

    run(&db_path, &["backup", "--file", &zip, "--compress"])
        .failure()
        .stderr(contains("must not be a .zip file"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_operations");
    init_and_login(&db_path);

    run(
        &db_path,
        &["--offline", "subject", "add", "--code", "SEJ-01", "--name", "Sejarah"],
    )
    .success();

    run(&db_path, &["log", "--print"])
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("login"))
        .stdout(contains("add subjects #4"));
}
