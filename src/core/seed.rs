//! Sample school used by `init --demo`.

use crate::core::state::AppState;
use crate::core::users::hash_password;
use crate::models::enums::*;
use crate::models::*;
use chrono::{Duration, NaiveDate};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn teacher(id: i64, name: &str, gender: Gender, nip: Option<&str>) -> Teacher {
    Teacher {
        id,
        name: name.to_string(),
        gender,
        status: if nip.is_some() {
            TeacherStatus::Asn
        } else {
            TeacherStatus::NonAsn
        },
        nip: nip.map(str::to_string),
    }
}

fn student(id: i64, nisn: &str, name: &str, gender: Gender, class_id: i64) -> Student {
    Student {
        id,
        nisn: nisn.to_string(),
        name: name.to_string(),
        gender,
        status: StudentStatus::New,
        entry_date: ymd(2023, 7, 15),
        exit_date: None,
        photo: None,
        whatsapp: None,
        class_id,
    }
}

/// Demo data; attendance dates are relative to `today`.
pub fn demo_state(today: NaiveDate) -> AppState {
    let ago = |days: i64| today - Duration::days(days);

    let school = School {
        id: 1,
        npsn: "12345678".to_string(),
        name: "SMK Negeri 1 Codeville".to_string(),
        level: SchoolLevel::Smk,
        headmaster: "Dr. John Doe".to_string(),
        vice_headmaster: "Jane Smith, M.Pd.".to_string(),
        address: "Jl. Raya Koding No. 404, Jakarta".to_string(),
        logo: String::new(),
        format: SchoolDays::Five,
    };

    let teachers = vec![
        teacher(1, "Budi Santoso", Gender::Male, Some("198001012010011001")),
        teacher(2, "Citra Lestari", Gender::Female, None),
        teacher(3, "Agus Wijaya", Gender::Male, Some("198505052015031002")),
    ];

    let subjects = [(1, "MTK-01", "Matematika"), (2, "FIS-01", "Fisika"), (3, "BIO-01", "Biologi")]
        .into_iter()
        .map(|(id, code, name)| Subject {
            id,
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect();

    let classes = vec![
        Class {
            id: 1,
            code: "X-RPL".to_string(),
            name: "X Rekayasa Perangkat Lunak".to_string(),
            homeroom_teacher_id: 1,
        },
        Class {
            id: 2,
            code: "XI-TJKT".to_string(),
            name: "XI TJKT 1".to_string(),
            homeroom_teacher_id: 2,
        },
    ];

    let subject_teachers = [(1, 1, 1, 1, 4), (2, 2, 2, 1, 3), (3, 3, 3, 2, 3), (4, 1, 1, 2, 4)]
        .into_iter()
        .map(|(id, teacher_id, subject_id, class_id, meetings)| SubjectTeacher {
            id,
            teacher_id,
            subject_id,
            class_id,
            meetings,
        })
        .collect();

    let mut students = vec![
        student(1, "001", "Andi", Gender::Male, 2),
        student(2, "002", "Budi", Gender::Male, 2),
        student(3, "003", "Hasan", Gender::Male, 2),
        student(4, "004", "Nurdi", Gender::Male, 2),
        student(5, "005", "Isma", Gender::Female, 2),
        student(6, "006", "Nina", Gender::Female, 2),
        student(7, "007", "Ani", Gender::Female, 2),
        student(8, "008", "Siti", Gender::Female, 1),
    ];
    students[0].status = StudentStatus::Inactive;
    students[0].exit_date = Some(ymd(2024, 6, 20));

    let student_transfers = vec![StudentTransfer {
        id: 1,
        student_id: 1,
        exit_date: ymd(2024, 6, 20),
        reason: TransferReason::Moved,
        notes: Some("Pindah ke sekolah lain di luar kota.".to_string()),
    }];

    use AttendanceStatus::*;
    let student_attendance = [
        (2, 2, Present),
        (3, 2, Present),
        (4, 2, Sick),
        (2, 1, Present),
        (3, 1, Excused),
        (4, 1, Present),
        (2, 14, Present),
        (3, 14, Present),
        (4, 14, Absent),
        (8, 8, Present),
        (8, 7, Present),
        (8, 6, Present),
        (8, 5, Present),
        (8, 4, Present),
        (2, 35, Present),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (student_id, days, status))| StudentAttendance {
        id: i as i64 + 1,
        student_id,
        date: ago(days),
        meeting: 1,
        status,
    })
    .collect();

    let teacher_attendance = [
        (1, 1, 1, 8, 4),
        (1, 1, 2, 8, 4),
        (1, 1, 1, 1, 4),
        (1, 1, 2, 1, 3),
        (2, 2, 1, 9, 3),
        (2, 2, 1, 2, 3),
        (3, 3, 2, 15, 3),
        (3, 3, 2, 0, 3),
    ]
    .into_iter()
    .enumerate()
    .map(
        |(i, (teacher_id, subject_id, class_id, days, meetings))| TeacherAttendance {
            id: i as i64 + 1,
            teacher_id,
            subject_id,
            class_id,
            date: ago(days),
            meetings,
        },
    )
    .collect();

    let student_achievements = vec![
        StudentAchievement {
            id: 1,
            student_id: 2,
            achievement_name: "Juara 1 Lomba Cerdas Cermat".to_string(),
            level: AchievementLevel::Regency,
            date: ymd(2024, 5, 10),
        },
        StudentAchievement {
            id: 2,
            student_id: 5,
            achievement_name: "Olimpiade Sains Nasional (OSN) Fisika".to_string(),
            level: AchievementLevel::National,
            date: ymd(2024, 8, 20),
        },
    ];

    let student_violations = vec![
        StudentViolation {
            id: 1,
            student_id: 3,
            violation_name: "Terlambat masuk sekolah".to_string(),
            level: ViolationLevel::Minor,
            date: ymd(2024, 9, 1),
            sanction: Sanction::VerbalWarning,
        },
        StudentViolation {
            id: 2,
            student_id: 4,
            violation_name: "Tidak mengerjakan tugas".to_string(),
            level: ViolationLevel::Moderate,
            date: ymd(2024, 9, 5),
            sanction: Sanction::WrittenWarning,
        },
    ];

    let users = vec![
        User {
            id: 1,
            name: "Rahmat".to_string(),
            username: "admin".to_string(),
            password_hash: Some(hash_password("password123")),
        },
        User {
            id: 2,
            name: "Guru Contoh".to_string(),
            username: "guru".to_string(),
            password_hash: None,
        },
    ];

    let event = |id, date, title: &str, status, description: Option<&str>| CalendarEvent {
        id,
        date,
        title: title.to_string(),
        status,
        description: description.map(str::to_string),
    };
    let calendar_events = vec![
        event(
            1,
            ymd(2024, 7, 1),
            "Awal Tahun Ajaran Baru",
            CalendarStatus::Active,
            Some("Hari pertama masuk sekolah."),
        ),
        event(2, ymd(2024, 8, 17), "Hari Kemerdekaan RI", CalendarStatus::Holiday, None),
        event(
            3,
            ymd(2024, 9, 16),
            "Penilaian Tengah Semester (PTS)",
            CalendarStatus::Ineffective,
            Some("Minggu pelaksanaan PTS ganjil."),
        ),
        event(4, ymd(2024, 12, 25), "Hari Raya Natal", CalendarStatus::Holiday, None),
    ];

    AppState {
        school,
        teachers,
        subjects,
        classes,
        subject_teachers,
        students,
        student_transfers,
        student_attendance,
        teacher_attendance,
        student_achievements,
        student_violations,
        users,
        calendar_events,
    }
}
