//! Students and their transfer-out ("mutasi") records.

use crate::core::crud::{self, Change, Operation, required};
use crate::core::state::{AppState, Collection};
use crate::errors::{AppError, AppResult};
use crate::models::enums::StudentStatus;
use crate::models::{Student, StudentTransfer};

// ---------------------------
// Students
// ---------------------------

/// NISN must not belong to another student.
pub fn ensure_unique_nisn(state: &AppState, nisn: &str, own_id: i64) -> AppResult<()> {
    let taken = state
        .students
        .iter()
        .any(|s| s.id != own_id && s.nisn == nisn);
    if taken {
        return Err(AppError::Duplicate(format!("NISN '{nisn}' is already registered")));
    }
    Ok(())
}

fn check_student(state: &AppState, s: &mut Student) -> AppResult<()> {
    s.nisn = s.nisn.trim().to_string();
    s.name = s.name.trim().to_string();
    required("nisn", &s.nisn)?;
    required("name", &s.name)?;
    crud::require(&state.classes, s.class_id)?;
    ensure_unique_nisn(state, &s.nisn, s.id)?;
    Ok(())
}

pub fn add_student(state: &mut AppState, mut student: Student) -> AppResult<Change> {
    student.id = 0;
    check_student(state, &mut student)?;
    let id = crud::insert(&mut state.students, student);
    Ok(Change::new(Collection::Students, Operation::Add, id))
}

pub fn update_student(state: &mut AppState, mut student: Student) -> AppResult<Change> {
    crud::require(&state.students, student.id)?;
    check_student(state, &mut student)?;
    let id = student.id;
    crud::replace(&mut state.students, student)?;
    Ok(Change::new(Collection::Students, Operation::Edit, id))
}

/// Attendance, transfers and records of the student are not cascaded.
pub fn delete_student(state: &mut AppState, id: i64) -> AppResult<Change> {
    crud::remove(&mut state.students, id)?;
    Ok(Change::new(Collection::Students, Operation::Delete, id))
}

/// Students filtered by class and by a case-insensitive name or NISN
/// fragment.
pub fn search<'a>(state: &'a AppState, class_id: Option<i64>, term: Option<&str>) -> Vec<&'a Student> {
    let term = term.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty());

    state
        .students
        .iter()
        .filter(|s| class_id.is_none_or(|c| s.class_id == c))
        .filter(|s| match &term {
            Some(t) => s.name.to_lowercase().contains(t) || s.nisn.contains(t.as_str()),
            None => true,
        })
        .collect()
}

// ---------------------------
// Transfers
// ---------------------------

fn student_mut(state: &mut AppState, id: i64) -> AppResult<&mut Student> {
    state
        .students
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(AppError::NotFound {
            entity: "Student",
            id,
        })
}

/// Record a transfer-out: the student becomes inactive with the exit date.
pub fn add_transfer(state: &mut AppState, mut transfer: StudentTransfer) -> AppResult<Vec<Change>> {
    transfer.id = 0;
    let student = crud::find(&state.students, transfer.student_id)?;
    if !student.is_active() {
        return Err(AppError::Validation(format!(
            "student '{}' has already left the school",
            student.name
        )));
    }

    let student_id = transfer.student_id;
    let exit_date = transfer.exit_date;
    let id = crud::insert(&mut state.student_transfers, transfer);

    let student = student_mut(state, student_id)?;
    student.status = StudentStatus::Inactive;
    student.exit_date = Some(exit_date);

    Ok(vec![
        Change::new(Collection::StudentTransfers, Operation::Add, id),
        Change::new(Collection::Students, Operation::Edit, student_id),
    ])
}

/// Edit date, reason or notes; the exit date is mirrored on the student.
pub fn update_transfer(state: &mut AppState, transfer: StudentTransfer) -> AppResult<Vec<Change>> {
    let current = crud::find(&state.student_transfers, transfer.id)?;
    if current.student_id != transfer.student_id {
        return Err(AppError::Validation(
            "the student of a transfer cannot be changed; delete it and record a new one"
                .to_string(),
        ));
    }

    let id = transfer.id;
    let student_id = transfer.student_id;
    let exit_date = transfer.exit_date;
    crud::replace(&mut state.student_transfers, transfer)?;

    let mut changes = vec![Change::new(Collection::StudentTransfers, Operation::Edit, id)];
    if let Ok(student) = student_mut(state, student_id) {
        student.exit_date = Some(exit_date);
        changes.push(Change::new(Collection::Students, Operation::Edit, student_id));
    }
    Ok(changes)
}

/// Remove a transfer. When it was the student's last one the student is
/// re-activated as "Siswa Baru" and loses its exit date.
pub fn delete_transfer(state: &mut AppState, id: i64) -> AppResult<Vec<Change>> {
    let removed = crud::remove(&mut state.student_transfers, id)?;
    let mut changes = vec![Change::new(Collection::StudentTransfers, Operation::Delete, id)];

    let remaining = state
        .student_transfers
        .iter()
        .filter(|t| t.student_id == removed.student_id)
        .max_by_key(|t| t.exit_date)
        .map(|t| t.exit_date);

    if let Ok(student) = student_mut(state, removed.student_id) {
        match remaining {
            None => {
                student.status = StudentStatus::New;
                student.exit_date = None;
            }
            Some(latest) => student.exit_date = Some(latest),
        }
        changes.push(Change::new(Collection::Students, Operation::Edit, removed.student_id));
    }
    Ok(changes)
}
