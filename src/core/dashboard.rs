use crate::core::calendar;
use crate::core::state::AppState;
use crate::core::sync::{self, SyncOverview};
use crate::errors::AppResult;
use crate::models::CalendarEvent;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Figures shown on the home screen.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub school_name: String,
    pub active_students: usize,
    pub teachers: usize,
    pub classes: usize,
    pub subjects: usize,
    pub achievements: usize,
    pub violations: usize,
    pub upcoming: Vec<CalendarEvent>,
    pub sync: SyncOverview,
}

pub fn collect(state: &AppState, conn: &Connection, online: bool, today: NaiveDate) -> AppResult<DashboardStats> {
    let upcoming = calendar::agenda(state)
        .into_iter()
        .filter(|e| e.date >= today)
        .take(3)
        .cloned()
        .collect();

    Ok(DashboardStats {
        school_name: state.school.name.clone(),
        active_students: state.active_student_count(),
        teachers: state.teachers.len(),
        classes: state.classes.len(),
        subjects: state.subjects.len(),
        achievements: state.student_achievements.len(),
        violations: state.student_violations.len(),
        upcoming,
        sync: sync::overview(conn, online)?,
    })
}
