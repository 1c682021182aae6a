use chrono::NaiveDate;
use lapkes::core::crud::{Change, Operation, paginate};
use lapkes::core::import::{self, Cell, Sheet};
use lapkes::core::recap::{self, expected_meetings, percentage};
use lapkes::core::seed::demo_state;
use lapkes::core::state::Collection;
use lapkes::core::students;
use lapkes::core::sync::{self, SyncProgress, SyncStatus, SyncTransport};
use lapkes::db::initialize::init_db;
use lapkes::db::pool::DbPool;
use lapkes::db::sync_queue::{self, PendingItem};
use lapkes::errors::AppError;
use lapkes::models::enums::{AttendanceStatus, StudentStatus};
use lapkes::utils::date::{DateRange, parse_range};
use rust_xlsxwriter::Workbook;
use std::env;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn text_row(values: &[&str]) -> Vec<Cell> {
    values
        .iter()
        .map(|v| {
            if v.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(v.to_string())
            }
        })
        .collect()
}

fn header_row() -> Vec<Cell> {
    text_row(&["nisn", "name", "gender", "status", "entryDate", "className"])
}

// ---------------------------
// Recaps
// ---------------------------

#[test]
fn teacher_recap_is_empty_without_weekdays() {
    let state = demo_state(ymd(2024, 3, 15));
    // Saturday and Sunday
    let weekend = DateRange::new(ymd(2024, 3, 2), ymd(2024, 3, 3));

    assert_eq!(weekend.weekdays(), 0);
    assert!(recap::teacher_recap(&state, weekend, None).is_empty());
}

#[test]
fn expected_meetings_and_percentage() {
    // 4 meetings/week over 10 weekdays
    assert_eq!(expected_meetings(4, 10), 8);
    // 3 meetings/week over 7 weekdays: 4.2 rounds down
    assert_eq!(expected_meetings(3, 7), 4);
    assert_eq!(percentage(6, 8), 75.0);
    assert_eq!(percentage(5, 4), 100.0);
    assert_eq!(percentage(3, 0), 0.0);
}

#[test]
fn student_recap_counts_every_status_inside_range() {
    let today = ymd(2024, 3, 15);
    let state = demo_state(today);
    let range = DateRange::new(today - chrono::Duration::days(14), today);

    let rows = recap::student_recap(&state, range, Some(2));
    assert_eq!(rows.len(), 7);

    let nurdi = rows.iter().find(|r| r.name == "Nurdi").expect("Nurdi");
    assert_eq!(nurdi.summary.present, 1);
    assert_eq!(nurdi.summary.sick, 1);
    assert_eq!(nurdi.summary.absent, 1);
    assert_eq!(nurdi.summary.total(), 3);

    // 35 days ago is outside the range
    let budi = rows.iter().find(|r| r.name == "Budi").expect("Budi");
    assert_eq!(budi.summary.present, 3);

    for r in &rows {
        let s = r.summary;
        assert_eq!(s.total(), s.present + s.sick + s.excused + s.absent);
    }
}

#[test]
fn teacher_recap_uses_assignment_load() {
    let today = ymd(2024, 3, 15);
    let mut state = demo_state(today);
    state.teacher_attendance.clear();
    state.teacher_attendance.push(lapkes::models::TeacherAttendance {
        id: 1,
        teacher_id: 2,
        subject_id: 2,
        class_id: 1,
        date: ymd(2024, 3, 4),
        meetings: 30,
    });

    let range = parse_range("2024-03").expect("range");
    let rows = recap::teacher_recap(&state, range, Some(2));

    assert_eq!(rows.len(), 1);
    // 3 meetings/week over 21 weekdays: round(12.6) = 13
    assert_eq!(rows[0].expected, 13);
    assert_eq!(rows[0].attended, 30);
    assert_eq!(rows[0].percentage, 100.0);
}

#[test]
fn teacher_recap_saturates_huge_meeting_counts() {
    let mut state = demo_state(ymd(2024, 3, 15));
    state.teacher_attendance.clear();
    for a in state.subject_teachers.iter_mut().filter(|a| a.teacher_id == 1) {
        a.meetings = u32::MAX;
    }
    for id in 1..=2 {
        state.teacher_attendance.push(lapkes::models::TeacherAttendance {
            id,
            teacher_id: 1,
            subject_id: 1,
            class_id: 1,
            date: ymd(2024, 3, 4),
            meetings: u32::MAX,
        });
    }

    let range = parse_range("2024-03").expect("range");
    let rows = recap::teacher_recap(&state, range, Some(1));

    assert_eq!(rows[0].expected, u32::MAX);
    assert_eq!(rows[0].attended, u32::MAX);
    assert_eq!(rows[0].percentage, 100.0);
}

// ---------------------------
// Import
// ---------------------------

#[test]
fn import_rejects_nisn_repeated_in_file_and_adds_nothing() {
    let mut state = demo_state(ymd(2024, 3, 15));
    let before = state.students.len();

    let sheet = Sheet::from_rows(vec![
        header_row(),
        text_row(&["2001", "Rina", "Perempuan", "Siswa Baru", "2024-07-15", "XI TJKT 1"]),
        text_row(&["2001", "Rini", "Perempuan", "Siswa Baru", "2024-07-15", "XI TJKT 1"]),
    ]);

    let err = import::import_students(&mut state, &sheet).expect_err("duplicate NISN");
    match err {
        AppError::Import(msg) => {
            assert!(msg.starts_with("row 3:"), "{msg}");
            assert!(msg.contains("2001"), "{msg}");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(state.students.len(), before);
}

#[test]
fn import_reports_incomplete_row() {
    let mut state = demo_state(ymd(2024, 3, 15));

    let sheet = Sheet::from_rows(vec![
        header_row(),
        text_row(&["2001", "", "Perempuan", "Siswa Baru", "2024-07-15", "XI TJKT 1"]),
    ]);

    let err = import::import_students(&mut state, &sheet).expect_err("missing name");
    assert!(err.to_string().contains("row 2: incomplete data"));
}

#[test]
fn import_skips_blank_rows_and_matches_class_case_insensitively() {
    let mut state = demo_state(ymd(2024, 3, 15));

    let sheet = Sheet::from_rows(vec![
        header_row(),
        text_row(&["", "", "", "", "", ""]),
        text_row(&["2002", "Joko", "laki-laki", "siswa pindahan", "2024-07-15", "xi tjkt 1"]),
    ]);

    let changes = import::import_students(&mut state, &sheet).expect("import");
    assert_eq!(
        changes,
        vec![Change::new(Collection::Students, Operation::Import, 9)]
    );

    let joko = state.students.last().expect("student");
    assert_eq!(joko.class_id, 2);
    assert_eq!(joko.status, StudentStatus::Transfer);
}

#[test]
fn import_rejects_gender_outside_persisted_values() {
    let mut state = demo_state(ymd(2024, 3, 15));
    let before = state.students.len();

    let sheet = Sheet::from_rows(vec![
        header_row(),
        text_row(&["2003", "Tono", "Laki-Laki", "Siswa Baru", "2024-07-15", "XI TJKT 1"]),
        text_row(&["2004", "Rudi", "male", "Siswa Baru", "2024-07-15", "XI TJKT 1"]),
    ]);

    let err = import::import_students(&mut state, &sheet).expect_err("alias gender");
    match err {
        AppError::Import(msg) => {
            assert!(msg.starts_with("row 3: invalid gender 'male'"), "{msg}");
            assert!(msg.contains("Laki-Laki, Perempuan"), "{msg}");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(state.students.len(), before);
}

#[test]
fn import_rejects_out_of_range_date_serial() {
    let mut state = demo_state(ymd(2024, 3, 15));
    let before = state.students.len();

    let mut row = text_row(&["2005", "Wati", "Perempuan", "Siswa Baru", "", "XI TJKT 1"]);
    row[4] = Cell::Number(1e15);
    let sheet = Sheet::from_rows(vec![header_row(), row]);

    let err = import::import_students(&mut state, &sheet).expect_err("huge serial");
    match err {
        AppError::Import(msg) => assert!(msg.starts_with("row 2: invalid date"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(state.students.len(), before);
}

#[test]
fn import_reads_xlsx_numbers_and_date_serials() {
    let mut state = demo_state(ymd(2024, 3, 15));
    let mut path = env::temp_dir();
    path.push("core_import_numbers.xlsx");
    std::fs::remove_file(&path).ok();

    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    for (col, h) in ["nisn", "name", "gender", "status", "entryDate", "className", "whatsapp"]
        .iter()
        .enumerate()
    {
        ws.write_string(0, col as u16, *h).expect("header");
    }
    ws.write_number(1, 0, 3001).expect("nisn");
    ws.write_string(1, 1, "Dewi").expect("name");
    ws.write_string(1, 2, "Perempuan").expect("gender");
    ws.write_string(1, 3, "Siswa Baru").expect("status");
    // 2024-07-15
    ws.write_number(1, 4, 45488).expect("date");
    ws.write_string(1, 5, "X Rekayasa Perangkat Lunak").expect("class");
    ws.write_number(1, 6, 6281234567890_i64 as f64).expect("whatsapp");

    ws.write_string(2, 0, "3002").expect("nisn");
    ws.write_string(2, 1, "Eka").expect("name");
    ws.write_string(2, 2, "Laki-Laki").expect("gender");
    ws.write_string(2, 3, "Siswa Baru").expect("status");
    ws.write_string(2, 4, "2024-07-16").expect("date");
    ws.write_string(2, 5, "XI TJKT 1").expect("class");
    workbook.save(&path).expect("save xlsx");

    let sheet = import::read_sheet(&path).expect("read xlsx");
    let changes = import::import_students(&mut state, &sheet).expect("import");
    assert_eq!(changes.len(), 2);

    let dewi = state.students.iter().find(|s| s.nisn == "3001").expect("Dewi");
    assert_eq!(dewi.entry_date, ymd(2024, 7, 15));
    assert_eq!(dewi.class_id, 1);
    assert_eq!(dewi.whatsapp.as_deref(), Some("6281234567890"));

    let eka = state.students.iter().find(|s| s.nisn == "3002").expect("Eka");
    assert_eq!(eka.entry_date, ymd(2024, 7, 16));
    assert_eq!(eka.whatsapp, None);
}

// ---------------------------
// Transfers
// ---------------------------

#[test]
fn deleting_last_transfer_reactivates_student() {
    let mut state = demo_state(ymd(2024, 3, 15));

    let andi = state.students.iter().find(|s| s.id == 1).expect("Andi");
    assert_eq!(andi.status, StudentStatus::Inactive);

    let changes = students::delete_transfer(&mut state, 1).expect("delete transfer");
    assert_eq!(changes.len(), 2);

    let andi = state.students.iter().find(|s| s.id == 1).expect("Andi");
    assert_eq!(andi.status, StudentStatus::New);
    assert_eq!(andi.exit_date, None);

    assert!(matches!(
        students::delete_transfer(&mut state, 1),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn attendance_upserts_same_meeting() {
    use lapkes::core::attendance::submit_class_attendance;

    let mut state = demo_state(ymd(2024, 3, 15));
    let date = ymd(2024, 3, 11);
    let before = state.student_attendance.len();

    submit_class_attendance(&mut state, 1, date, 1, &[]).expect("first submit");
    let changes = submit_class_attendance(&mut state, 1, date, 1, &[(8, AttendanceStatus::Excused)])
        .expect("second submit");

    assert_eq!(changes[0].operation, Operation::Edit);
    assert_eq!(state.student_attendance.len(), before + 1);
    let record = state.student_attendance.last().expect("record");
    assert_eq!(record.status, AttendanceStatus::Excused);
}

// ---------------------------
// Sync queue
// ---------------------------

struct FlakyTransport {
    fail_on: Option<i64>,
    delivered: Vec<i64>,
}

impl SyncTransport for FlakyTransport {
    fn push(&mut self, item: &PendingItem) -> Result<(), String> {
        if self.fail_on == Some(item.record_id) {
            return Err("server unreachable".to_string());
        }
        self.delivered.push(item.record_id);
        Ok(())
    }
}

#[test]
fn sync_failure_keeps_remaining_items_for_retry() {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("init db");

    for id in 1..=3 {
        sync_queue::enqueue(&pool.conn, "teachers", "add", id).expect("enqueue");
    }

    let mut transport = FlakyTransport {
        fail_on: Some(2),
        delivered: Vec::new(),
    };
    let mut seen = Vec::new();
    let err = sync::sync_now(&pool.conn, true, &mut transport, |s, p| seen.push((s, p)))
        .expect_err("push failure");
    assert!(matches!(err, AppError::Sync(_)));
    assert_eq!(transport.delivered, vec![1]);
    assert_eq!(
        seen.last().copied(),
        Some((SyncStatus::Failed, SyncProgress { current: 1, total: 3 }))
    );

    let o = sync::overview(&pool.conn, true).expect("overview");
    assert_eq!(o.status, SyncStatus::Failed);
    assert_eq!(o.pending, 2);
    assert_eq!(o.state.last_error.as_deref(), Some("server unreachable"));

    transport.fail_on = None;
    let mut seen = Vec::new();
    let report = sync::sync_now(&pool.conn, true, &mut transport, |s, p| seen.push((s, p)))
        .expect("retry");
    assert_eq!(report.synced, 2);
    assert_eq!(transport.delivered, vec![1, 2, 3]);
    assert_eq!(
        seen.first().copied(),
        Some((SyncStatus::Syncing, SyncProgress { current: 1, total: 2 }))
    );

    let o = sync::overview(&pool.conn, true).expect("overview");
    assert_eq!(o.status, SyncStatus::Idle);
    assert_eq!(o.pending, 0);
    assert!(o.state.last_synced_at.is_some());
}

#[test]
fn sync_refused_while_offline() {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("init db");
    sync_queue::enqueue(&pool.conn, "students", "edit", 4).expect("enqueue");

    let mut transport = FlakyTransport {
        fail_on: None,
        delivered: Vec::new(),
    };
    let err = sync::sync_now(&pool.conn, false, &mut transport, |_: SyncStatus, _: SyncProgress| {})
        .expect_err("offline");

    assert!(matches!(err, AppError::Offline(_)));
    assert_eq!(sync_queue::count(&pool.conn).expect("count"), 1);
}

// ---------------------------
// Pagination and ranges
// ---------------------------

#[test]
fn paginate_clamps_requested_page() {
    let items: Vec<i32> = (1..=45).collect();

    let last = paginate(&items, 99, 20);
    assert_eq!(last.page, 3);
    assert_eq!(last.total_pages, 3);
    assert_eq!(last.items, &[41, 42, 43, 44, 45]);

    let first = paginate(&items, 0, 20);
    assert_eq!(first.page, 1);
    assert_eq!(first.items.len(), 20);

    let empty: Vec<i32> = Vec::new();
    let page = paginate(&empty, 3, 20);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

#[test]
fn week_range_starts_on_monday() {
    // Thursday
    let day = ymd(2024, 3, 14);
    let week = DateRange::week_of(day, 5);
    assert_eq!(week.start, ymd(2024, 3, 11));
    assert_eq!(week.end, ymd(2024, 3, 15));
    assert_eq!(week.weekdays(), 5);

    let month = DateRange::month_of(ymd(2024, 2, 10));
    assert_eq!(month.end, ymd(2024, 2, 29));
}
