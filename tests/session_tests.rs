use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_and_login, run, setup_test_db};

#[test]
fn test_commands_require_login() {
    let db_path = setup_test_db("session_required");

    run(&db_path, &["init", "--demo"]).success();

    run(&db_path, &["teacher", "list"])
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_login_with_wrong_password_fails() {
    let db_path = setup_test_db("session_wrong_password");

    run(&db_path, &["init"]).success();

    run(&db_path, &["login", "-u", "admin", "-p", "nope"])
        .failure()
        .stderr(contains("Invalid username or password"));

    run(&db_path, &["dashboard"]).failure();
}

#[test]
fn test_login_then_logout() {
    let db_path = setup_test_db("session_login_logout");
    init_and_login(&db_path);

    run(&db_path, &["dashboard"])
        .success()
        .stdout(contains("SMK Negeri 1 Codeville"));

    run(&db_path, &["logout"])
        .success()
        .stdout(contains("Logged out."));

    run(&db_path, &["logout"])
        .success()
        .stdout(contains("No active session."));

    run(&db_path, &["student", "list"])
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_init_demo_messages() {
    let db_path = setup_test_db("session_init_demo");

    run(&db_path, &["init", "--demo"])
        .success()
        .stdout(contains("Sample school data loaded."))
        .stdout(contains("LAPKES initialization completed!"))
        .stdout(contains("Config file").not());
}

#[test]
fn test_school_set_and_show() {
    let db_path = setup_test_db("session_school_set");
    init_and_login(&db_path);

    run(
        &db_path,
        &["school", "set", "--name", "SMA Negeri 2 Codeville", "--level", "sma", "--format", "6"],
    )
    .success()
    .stdout(contains("School identity saved."));

    run(&db_path, &["school", "show"])
        .success()
        .stdout(contains("SMA Negeri 2 Codeville"))
        .stdout(contains("SMA"))
        .stdout(contains("6 Hari"))
        .stdout(contains("12345678"));

    run(&db_path, &["school", "set", "--npsn", " "])
        .failure()
        .stderr(contains("npsn is required"));
}

#[test]
fn test_user_add_requires_unique_username() {
    let db_path = setup_test_db("session_user_add");
    init_and_login(&db_path);

    run(
        &db_path,
        &["user", "add", "--name", "Operator", "--username", "operator", "--password", "rahasia"],
    )
    .success()
    .stdout(contains("User added (id 3)."));

    run(&db_path, &["user", "list"])
        .success()
        .stdout(contains("operator"))
        .stdout(contains("rahasia").not());

    run(
        &db_path,
        &["user", "add", "--name", "Lain", "--username", "ADMIN", "--password", "x"],
    )
    .failure()
    .stderr(contains("username 'ADMIN' is already in use"));
}
