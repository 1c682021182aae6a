use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_and_login, run, setup_test_db};

#[test]
fn test_offline_changes_are_queued_then_synchronized() {
    let db_path = setup_test_db("sync_queue_flush");
    init_and_login(&db_path);

    run(
        &db_path,
        &["--offline", "subject", "add", "--code", "KIM-01", "--name", "Kimia"],
    )
    .success()
    .stdout(contains("Subject added (id 4)."))
    .stdout(contains("Synchronized").not());

    run(&db_path, &["--offline", "sync", "status"])
        .success()
        .stdout(contains("offline"))
        .stdout(contains("pending"));

    run(&db_path, &["--offline", "sync", "now"])
        .failure()
        .stderr(contains("offline"));

    run(&db_path, &["sync", "now"])
        .success()
        .stdout(contains("Synchronized 1 change(s)."));

    run(&db_path, &["sync", "status"])
        .success()
        .stdout(contains("online"))
        .stdout(contains("idle"))
        .stdout(contains("Last sync"));

    run(&db_path, &["sync", "now"])
        .success()
        .stdout(contains("Nothing to synchronize."));
}

#[test]
fn test_online_change_is_flushed_automatically() {
    let db_path = setup_test_db("sync_auto_flush");
    init_and_login(&db_path);

    run(
        &db_path,
        &[
            "calendar", "add", "--date", "2024-11-25", "--title", "Hari Guru", "--status",
            "Aktif",
        ],
    )
    .success()
    .stdout(contains("Synchronized 1 change(s)"));

    run(&db_path, &["sync", "status"])
        .success()
        .stdout(contains("idle"));
}

#[test]
fn test_transfer_queues_two_changes() {
    let db_path = setup_test_db("sync_transfer_changes");
    init_and_login(&db_path);

    run(
        &db_path,
        &[
            "--offline",
            "transfer",
            "add",
            "--student",
            "2",
            "--exit-date",
            "2024-12-01",
            "--reason",
            "pindah",
        ],
    )
    .success();

    run(&db_path, &["sync", "now"])
        .success()
        .stdout(contains("Synchronized 2 change(s)."));
}
