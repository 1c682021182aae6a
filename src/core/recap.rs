//! Attendance recap aggregation for students and teachers.

use crate::core::state::AppState;
use crate::core::staff;
use crate::models::enums::AttendanceStatus;
use crate::utils::date::DateRange;
use serde::Serialize;

/// Status counts of one student over a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub present: u32,
    pub sick: u32,
    pub excused: u32,
    pub absent: u32,
}

impl AttendanceSummary {
    pub fn add(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Sick => self.sick += 1,
            AttendanceStatus::Excused => self.excused += 1,
            AttendanceStatus::Absent => self.absent += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.present + self.sick + self.excused + self.absent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecapRow {
    pub student_id: i64,
    pub nisn: String,
    pub name: String,
    pub class_name: String,
    #[serde(flatten)]
    pub summary: AttendanceSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRecapRow {
    pub teacher_id: i64,
    pub name: String,
    pub expected: u32,
    pub attended: u32,
    pub percentage: f64,
}

/// One row per student (optionally limited to a class) with the statuses
/// recorded inside `range`.
pub fn student_recap(
    state: &AppState,
    range: DateRange,
    class_id: Option<i64>,
) -> Vec<StudentRecapRow> {
    state
        .students
        .iter()
        .filter(|s| class_id.is_none_or(|c| s.class_id == c))
        .map(|s| {
            let mut summary = AttendanceSummary::default();
            state
                .student_attendance
                .iter()
                .filter(|r| r.student_id == s.id && range.contains(r.date))
                .for_each(|r| summary.add(r.status));

            StudentRecapRow {
                student_id: s.id,
                nisn: s.nisn.clone(),
                name: s.name.clone(),
                class_name: state.class_name(s.class_id).to_string(),
                summary,
            }
        })
        .collect()
}

/// Expected vs. attended meetings per teacher.
///
/// Expected meetings are the weekly assignment load spread over five days
/// and multiplied by the weekdays in `range`. A range without weekdays
/// yields no rows.
pub fn teacher_recap(
    state: &AppState,
    range: DateRange,
    teacher_id: Option<i64>,
) -> Vec<TeacherRecapRow> {
    let weekdays = range.weekdays();
    if weekdays == 0 {
        return Vec::new();
    }

    state
        .teachers
        .iter()
        .filter(|t| teacher_id.is_none_or(|id| t.id == id))
        .map(|t| {
            let weekly = staff::weekly_meetings(state, t.id);
            let expected = expected_meetings(weekly, weekdays);
            let attended: u32 = state
                .teacher_attendance
                .iter()
                .filter(|r| r.teacher_id == t.id && range.contains(r.date))
                .fold(0u32, |acc, r| acc.saturating_add(r.meetings));

            TeacherRecapRow {
                teacher_id: t.id,
                name: t.name.clone(),
                expected,
                attended,
                percentage: percentage(attended, expected),
            }
        })
        .collect()
}

pub fn expected_meetings(weekly: u32, weekdays: u32) -> u32 {
    (weekly as f64 / 5.0 * weekdays as f64).round() as u32
}

/// `attended / expected` as a percentage in `0..=100`; 0 when nothing was
/// expected.
pub fn percentage(attended: u32, expected: u32) -> f64 {
    if expected == 0 {
        return 0.0;
    }
    (attended as f64 / expected as f64 * 100.0).min(100.0)
}
