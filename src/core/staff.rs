//! Teachers, subjects, classes and teaching assignments.

use crate::core::crud::{self, Change, Operation, required};
use crate::core::state::{AppState, Collection};
use crate::errors::{AppError, AppResult};
use crate::models::enums::TeacherStatus;
use crate::models::{Class, Subject, SubjectTeacher, Teacher};

// ---------------------------
// Teachers
// ---------------------------

/// Normalize and check a teacher record.
///
/// NIP is mandatory for ASN teachers and dropped for NON-ASN ones.
fn check_teacher(t: &mut Teacher) -> AppResult<()> {
    t.name = t.name.trim().to_string();
    required("name", &t.name)?;

    match t.status {
        TeacherStatus::Asn => {
            let nip = t.nip.as_deref().map(str::trim).unwrap_or("");
            if nip.is_empty() {
                return Err(AppError::Validation(
                    "NIP is required for ASN teachers".to_string(),
                ));
            }
            t.nip = Some(nip.to_string());
        }
        TeacherStatus::NonAsn => t.nip = None,
    }
    Ok(())
}

pub fn add_teacher(state: &mut AppState, mut teacher: Teacher) -> AppResult<Change> {
    check_teacher(&mut teacher)?;
    let id = crud::insert(&mut state.teachers, teacher);
    Ok(Change::new(Collection::Teachers, Operation::Add, id))
}

pub fn update_teacher(state: &mut AppState, mut teacher: Teacher) -> AppResult<Change> {
    check_teacher(&mut teacher)?;
    let id = teacher.id;
    crud::replace(&mut state.teachers, teacher)?;
    Ok(Change::new(Collection::Teachers, Operation::Edit, id))
}

/// Assignments and attendance referring to the teacher are left untouched.
pub fn delete_teacher(state: &mut AppState, id: i64) -> AppResult<Change> {
    crud::remove(&mut state.teachers, id)?;
    Ok(Change::new(Collection::Teachers, Operation::Delete, id))
}

// ---------------------------
// Subjects
// ---------------------------

fn check_subject(s: &mut Subject) -> AppResult<()> {
    s.code = s.code.trim().to_string();
    s.name = s.name.trim().to_string();
    required("code", &s.code)?;
    required("name", &s.name)?;
    Ok(())
}

pub fn add_subject(state: &mut AppState, mut subject: Subject) -> AppResult<Change> {
    check_subject(&mut subject)?;
    let id = crud::insert(&mut state.subjects, subject);
    Ok(Change::new(Collection::Subjects, Operation::Add, id))
}

pub fn update_subject(state: &mut AppState, mut subject: Subject) -> AppResult<Change> {
    check_subject(&mut subject)?;
    let id = subject.id;
    crud::replace(&mut state.subjects, subject)?;
    Ok(Change::new(Collection::Subjects, Operation::Edit, id))
}

pub fn delete_subject(state: &mut AppState, id: i64) -> AppResult<Change> {
    crud::remove(&mut state.subjects, id)?;
    Ok(Change::new(Collection::Subjects, Operation::Delete, id))
}

// ---------------------------
// Classes
// ---------------------------

fn check_class(state: &AppState, c: &mut Class) -> AppResult<()> {
    c.code = c.code.trim().to_string();
    c.name = c.name.trim().to_string();
    required("code", &c.code)?;
    required("name", &c.name)?;
    crud::require(&state.teachers, c.homeroom_teacher_id)?;
    Ok(())
}

pub fn add_class(state: &mut AppState, mut class: Class) -> AppResult<Change> {
    check_class(state, &mut class)?;
    let id = crud::insert(&mut state.classes, class);
    Ok(Change::new(Collection::Classes, Operation::Add, id))
}

pub fn update_class(state: &mut AppState, mut class: Class) -> AppResult<Change> {
    check_class(state, &mut class)?;
    let id = class.id;
    crud::replace(&mut state.classes, class)?;
    Ok(Change::new(Collection::Classes, Operation::Edit, id))
}

/// Students of the class keep their `classId`; reassigning them is left to
/// the administrator.
pub fn delete_class(state: &mut AppState, id: i64) -> AppResult<Change> {
    crud::remove(&mut state.classes, id)?;
    Ok(Change::new(Collection::Classes, Operation::Delete, id))
}

/// Case-insensitive lookup by class name.
pub fn find_class_by_name<'a>(state: &'a AppState, name: &str) -> Option<&'a Class> {
    let needle = name.trim().to_lowercase();
    state
        .classes
        .iter()
        .find(|c| c.name.to_lowercase() == needle)
}

// ---------------------------
// Subject assignments
// ---------------------------

fn check_assignment(state: &AppState, a: &SubjectTeacher) -> AppResult<()> {
    crud::require(&state.teachers, a.teacher_id)?;
    crud::require(&state.subjects, a.subject_id)?;
    crud::require(&state.classes, a.class_id)?;

    if a.meetings == 0 {
        return Err(AppError::Validation(
            "meetings per week must be at least 1".to_string(),
        ));
    }

    let duplicate = state.subject_teachers.iter().any(|o| {
        o.id != a.id
            && o.teacher_id == a.teacher_id
            && o.subject_id == a.subject_id
            && o.class_id == a.class_id
    });
    if duplicate {
        return Err(AppError::Duplicate(format!(
            "{} already teaches {} in {}",
            state.teacher_name(a.teacher_id),
            state.subject_name(a.subject_id),
            state.class_name(a.class_id)
        )));
    }
    Ok(())
}

pub fn add_assignment(state: &mut AppState, mut assignment: SubjectTeacher) -> AppResult<Change> {
    assignment.id = 0;
    check_assignment(state, &assignment)?;
    let id = crud::insert(&mut state.subject_teachers, assignment);
    Ok(Change::new(Collection::SubjectTeachers, Operation::Add, id))
}

pub fn update_assignment(state: &mut AppState, assignment: SubjectTeacher) -> AppResult<Change> {
    crud::require(&state.subject_teachers, assignment.id)?;
    check_assignment(state, &assignment)?;
    let id = assignment.id;
    crud::replace(&mut state.subject_teachers, assignment)?;
    Ok(Change::new(Collection::SubjectTeachers, Operation::Edit, id))
}

pub fn delete_assignment(state: &mut AppState, id: i64) -> AppResult<Change> {
    crud::remove(&mut state.subject_teachers, id)?;
    Ok(Change::new(Collection::SubjectTeachers, Operation::Delete, id))
}

/// Total weekly meetings assigned to a teacher across all classes.
pub fn weekly_meetings(state: &AppState, teacher_id: i64) -> u32 {
    state
        .subject_teachers
        .iter()
        .filter(|a| a.teacher_id == teacher_id)
        .fold(0u32, |acc, a| acc.saturating_add(a.meetings))
}
