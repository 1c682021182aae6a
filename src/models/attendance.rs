use super::enums::AttendanceStatus;
use super::impl_record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One student's status for one meeting on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendance {
    pub id: i64,
    pub student_id: i64,
    pub date: NaiveDate,
    pub meeting: u32,
    pub status: AttendanceStatus,
}

/// Meetings actually taught by a teacher on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherAttendance {
    pub id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub class_id: i64,
    pub date: NaiveDate,
    pub meetings: u32,
}

impl_record!(StudentAttendance, "Student attendance");
impl_record!(TeacherAttendance, "Teacher attendance");
