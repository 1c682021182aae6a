//! Daily student attendance and logged teacher meetings.

use crate::core::crud::{self, Change, Operation};
use crate::core::state::{AppState, Collection};
use crate::errors::{AppError, AppResult};
use crate::models::enums::AttendanceStatus;
use crate::models::{Student, StudentAttendance, TeacherAttendance};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Active students of a class, in the order they were registered.
pub fn roster(state: &AppState, class_id: i64) -> Vec<&Student> {
    state
        .students
        .iter()
        .filter(|s| s.class_id == class_id && s.is_active())
        .collect()
}

/// Record one meeting of a class.
///
/// Every student on the roster gets a record, `H` unless `overrides` says
/// otherwise. A record already present for the same (student, date,
/// meeting) is updated in place instead of duplicated.
pub fn submit_class_attendance(
    state: &mut AppState,
    class_id: i64,
    date: NaiveDate,
    meeting: u32,
    overrides: &[(i64, AttendanceStatus)],
) -> AppResult<Vec<Change>> {
    crud::require(&state.classes, class_id)?;
    if meeting == 0 {
        return Err(AppError::Validation("meeting must be at least 1".to_string()));
    }

    let student_ids: Vec<i64> = roster(state, class_id).iter().map(|s| s.id).collect();
    if student_ids.is_empty() {
        return Err(AppError::Validation(format!(
            "class '{}' has no active students",
            state.class_name(class_id)
        )));
    }

    let mut statuses: HashMap<i64, AttendanceStatus> = HashMap::new();
    for (student_id, status) in overrides {
        if !student_ids.contains(student_id) {
            return Err(AppError::Validation(format!(
                "student {student_id} is not an active member of class '{}'",
                state.class_name(class_id)
            )));
        }
        statuses.insert(*student_id, *status);
    }

    let mut changes = Vec::with_capacity(student_ids.len());
    for student_id in student_ids {
        let status = statuses
            .get(&student_id)
            .copied()
            .unwrap_or(AttendanceStatus::Present);

        let existing = state
            .student_attendance
            .iter_mut()
            .find(|r| r.student_id == student_id && r.date == date && r.meeting == meeting);

        match existing {
            Some(record) => {
                record.status = status;
                changes.push(Change::new(
                    Collection::StudentAttendance,
                    Operation::Edit,
                    record.id,
                ));
            }
            None => {
                let id = crud::insert(
                    &mut state.student_attendance,
                    StudentAttendance {
                        id: 0,
                        student_id,
                        date,
                        meeting,
                        status,
                    },
                );
                changes.push(Change::new(Collection::StudentAttendance, Operation::Add, id));
            }
        }
    }

    Ok(changes)
}

/// Attendance records of a day, optionally limited to one class.
pub fn records_for_day(
    state: &AppState,
    date: NaiveDate,
    class_id: Option<i64>,
) -> Vec<&StudentAttendance> {
    state
        .student_attendance
        .iter()
        .filter(|r| r.date == date)
        .filter(|r| match class_id {
            Some(c) => state
                .students
                .iter()
                .any(|s| s.id == r.student_id && s.class_id == c),
            None => true,
        })
        .collect()
}

// ---------------------------
// Teacher meetings
// ---------------------------

pub fn log_teacher_attendance(
    state: &mut AppState,
    mut record: TeacherAttendance,
) -> AppResult<Change> {
    crud::require(&state.teachers, record.teacher_id)?;
    crud::require(&state.subjects, record.subject_id)?;
    crud::require(&state.classes, record.class_id)?;
    if record.meetings == 0 {
        return Err(AppError::Validation("meetings must be at least 1".to_string()));
    }

    record.id = 0;
    let id = crud::insert(&mut state.teacher_attendance, record);
    Ok(Change::new(Collection::TeacherAttendance, Operation::Add, id))
}

pub fn delete_teacher_attendance(state: &mut AppState, id: i64) -> AppResult<Change> {
    crud::remove(&mut state.teacher_attendance, id)?;
    Ok(Change::new(Collection::TeacherAttendance, Operation::Delete, id))
}
