use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_and_login, run, setup_test_db, temp_out};

#[test]
fn test_template_round_trip_import() {
    let db_path = setup_test_db("import_template");
    init_and_login(&db_path);
    let template = temp_out("import_template", "xlsx");

    run(&db_path, &["student", "template", "--file", &template])
        .success()
        .stdout(contains("Template export completed"));

    run(&db_path, &["student", "import", "--file", &template])
        .success()
        .stdout(contains("2 students imported successfully."));

    run(&db_path, &["student", "list", "--search", "0012345679"])
        .success()
        .stdout(contains("Citra Lestari"))
        .stdout(contains("Siswa Pindahan"))
        .stdout(contains("6289876543210"));

    // second run hits the NISN already stored
    run(&db_path, &["student", "import", "--file", &template])
        .failure()
        .stderr(contains("row 2"))
        .stderr(contains("NISN '0012345678' is already registered"));
}

#[test]
fn test_csv_import_aborts_on_first_bad_row() {
    let db_path = setup_test_db("import_csv_bad_row");
    init_and_login(&db_path);
    let file = temp_out("import_csv_bad_row", "csv");

    fs::write(
        &file,
        "nisn,name,gender,status,entryDate,className\n\
         1001,Rina,Perempuan,Siswa Baru,2024-07-15,XI TJKT 1\n\
         1002,Joko,Laki-Laki,Siswa Baru,2024-07-15,Kelas Hantu\n",
    )
    .expect("write csv");

    run(&db_path, &["student", "import", "--file", &file])
        .failure()
        .stderr(contains("row 3"))
        .stderr(contains("class 'Kelas Hantu' not found"));

    run(&db_path, &["student", "list", "--search", "Rina"])
        .success()
        .stdout(contains("No data."));
}

#[test]
fn test_csv_import_missing_columns() {
    let db_path = setup_test_db("import_csv_missing_columns");
    init_and_login(&db_path);
    let file = temp_out("import_csv_missing_columns", "csv");

    fs::write(&file, "nisn,name,gender\n1001,Rina,Perempuan\n").expect("write csv");

    run(&db_path, &["student", "import", "--file", &file])
        .failure()
        .stderr(contains("missing columns: status, entryDate, className"));
}

#[test]
fn test_csv_import_rejects_bad_date_and_gender() {
    let db_path = setup_test_db("import_csv_bad_values");
    init_and_login(&db_path);
    let dates = temp_out("import_csv_bad_date", "csv");
    let genders = temp_out("import_csv_bad_gender", "csv");

    fs::write(
        &dates,
        "nisn,name,gender,status,entryDate,className\n\
         1001,Rina,Perempuan,Siswa Baru,15-07-2024,XI TJKT 1\n",
    )
    .expect("write csv");
    fs::write(
        &genders,
        "nisn,name,gender,status,entryDate,className\n\
         1001,Rina,Wanita,Siswa Baru,2024-07-15,XI TJKT 1\n",
    )
    .expect("write csv");

    run(&db_path, &["student", "import", "--file", &dates])
        .failure()
        .stderr(contains("use the YYYY-MM-DD format"));

    run(&db_path, &["student", "import", "--file", &genders])
        .failure()
        .stderr(contains("invalid gender 'Wanita'"));
}

#[test]
fn test_import_unsupported_extension() {
    let db_path = setup_test_db("import_bad_extension");
    init_and_login(&db_path);
    let file = temp_out("import_bad_extension", "txt");
    fs::write(&file, "nisn\n").expect("write txt");

    run(&db_path, &["student", "import", "--file", &file])
        .failure()
        .stderr(contains("unsupported file type"))
        .stdout(contains("imported successfully").not());
}
