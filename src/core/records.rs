//! Student achievements and violations.

use crate::core::crud::{self, Change, Operation, required};
use crate::core::state::{AppState, Collection};
use crate::errors::AppResult;
use crate::models::{StudentAchievement, StudentViolation};

fn check_achievement(state: &AppState, a: &mut StudentAchievement) -> AppResult<()> {
    a.achievement_name = a.achievement_name.trim().to_string();
    crud::require(&state.students, a.student_id)?;
    required("achievement name", &a.achievement_name)?;
    Ok(())
}

pub fn add_achievement(state: &mut AppState, mut achievement: StudentAchievement) -> AppResult<Change> {
    check_achievement(state, &mut achievement)?;
    let id = crud::insert(&mut state.student_achievements, achievement);
    Ok(Change::new(Collection::StudentAchievements, Operation::Add, id))
}

pub fn update_achievement(state: &mut AppState, mut achievement: StudentAchievement) -> AppResult<Change> {
    check_achievement(state, &mut achievement)?;
    let id = achievement.id;
    crud::replace(&mut state.student_achievements, achievement)?;
    Ok(Change::new(Collection::StudentAchievements, Operation::Edit, id))
}

pub fn delete_achievement(state: &mut AppState, id: i64) -> AppResult<Change> {
    crud::remove(&mut state.student_achievements, id)?;
    Ok(Change::new(Collection::StudentAchievements, Operation::Delete, id))
}

fn check_violation(state: &AppState, v: &mut StudentViolation) -> AppResult<()> {
    v.violation_name = v.violation_name.trim().to_string();
    crud::require(&state.students, v.student_id)?;
    required("violation name", &v.violation_name)?;
    Ok(())
}

pub fn add_violation(state: &mut AppState, mut violation: StudentViolation) -> AppResult<Change> {
    check_violation(state, &mut violation)?;
    let id = crud::insert(&mut state.student_violations, violation);
    Ok(Change::new(Collection::StudentViolations, Operation::Add, id))
}

pub fn update_violation(state: &mut AppState, mut violation: StudentViolation) -> AppResult<Change> {
    check_violation(state, &mut violation)?;
    let id = violation.id;
    crud::replace(&mut state.student_violations, violation)?;
    Ok(Change::new(Collection::StudentViolations, Operation::Edit, id))
}

pub fn delete_violation(state: &mut AppState, id: i64) -> AppResult<Change> {
    crud::remove(&mut state.student_violations, id)?;
    Ok(Change::new(Collection::StudentViolations, Operation::Delete, id))
}
