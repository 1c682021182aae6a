//! In-memory application state: every collection, loaded at startup and
//! written back whenever an operation changes it.

use crate::db::store;
use crate::errors::AppResult;
use crate::models::{
    CalendarEvent, Class, School, Student, StudentAchievement, StudentAttendance,
    StudentTransfer, StudentViolation, Subject, SubjectTeacher, Teacher, TeacherAttendance, User,
};
use crate::ui::messages::warning;
use rusqlite::Connection;
use serde::de::DeserializeOwned;

/// Named collections of the persistent store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    School,
    Teachers,
    Subjects,
    Classes,
    SubjectTeachers,
    Students,
    StudentTransfers,
    StudentAttendance,
    TeacherAttendance,
    StudentAchievements,
    StudentViolations,
    Users,
    CalendarEvents,
}

impl Collection {
    pub const ALL: [Collection; 13] = [
        Collection::School,
        Collection::Teachers,
        Collection::Subjects,
        Collection::Classes,
        Collection::SubjectTeachers,
        Collection::Students,
        Collection::StudentTransfers,
        Collection::StudentAttendance,
        Collection::TeacherAttendance,
        Collection::StudentAchievements,
        Collection::StudentViolations,
        Collection::Users,
        Collection::CalendarEvents,
    ];

    /// Storage key.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::School => "school",
            Collection::Teachers => "teachers",
            Collection::Subjects => "subjects",
            Collection::Classes => "classes",
            Collection::SubjectTeachers => "subjectTeachers",
            Collection::Students => "students",
            Collection::StudentTransfers => "studentTransfers",
            Collection::StudentAttendance => "studentAttendance",
            Collection::TeacherAttendance => "teacherAttendance",
            Collection::StudentAchievements => "studentAchievements",
            Collection::StudentViolations => "studentViolations",
            Collection::Users => "users",
            Collection::CalendarEvents => "calendarEvents",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub school: School,
    pub teachers: Vec<Teacher>,
    pub subjects: Vec<Subject>,
    pub classes: Vec<Class>,
    pub subject_teachers: Vec<SubjectTeacher>,
    pub students: Vec<Student>,
    pub student_transfers: Vec<StudentTransfer>,
    pub student_attendance: Vec<StudentAttendance>,
    pub teacher_attendance: Vec<TeacherAttendance>,
    pub student_achievements: Vec<StudentAchievement>,
    pub student_violations: Vec<StudentViolation>,
    pub users: Vec<User>,
    pub calendar_events: Vec<CalendarEvent>,
}

/// Read one collection; a missing key gives the default, an unreadable
/// value is reported and replaced by the default.
fn load_or_default<T: DeserializeOwned + Default>(conn: &Connection, c: Collection) -> T {
    match store::load_value::<T>(conn, c.key()) {
        Ok(Some(v)) => v,
        Ok(None) => T::default(),
        Err(e) => {
            warning(format!("Error reading collection \"{}\": {}", c.key(), e));
            T::default()
        }
    }
}

impl AppState {
    /// Load every collection from the store.
    pub fn load(conn: &Connection) -> Self {
        Self {
            school: load_or_default(conn, Collection::School),
            teachers: load_or_default(conn, Collection::Teachers),
            subjects: load_or_default(conn, Collection::Subjects),
            classes: load_or_default(conn, Collection::Classes),
            subject_teachers: load_or_default(conn, Collection::SubjectTeachers),
            students: load_or_default(conn, Collection::Students),
            student_transfers: load_or_default(conn, Collection::StudentTransfers),
            student_attendance: load_or_default(conn, Collection::StudentAttendance),
            teacher_attendance: load_or_default(conn, Collection::TeacherAttendance),
            student_achievements: load_or_default(conn, Collection::StudentAchievements),
            student_violations: load_or_default(conn, Collection::StudentViolations),
            users: load_or_default(conn, Collection::Users),
            calendar_events: load_or_default(conn, Collection::CalendarEvents),
        }
    }

    /// Write one collection back to the store.
    pub fn save(&self, conn: &Connection, c: Collection) -> AppResult<()> {
        let key = c.key();
        match c {
            Collection::School => store::save_value(conn, key, &self.school),
            Collection::Teachers => store::save_value(conn, key, &self.teachers),
            Collection::Subjects => store::save_value(conn, key, &self.subjects),
            Collection::Classes => store::save_value(conn, key, &self.classes),
            Collection::SubjectTeachers => store::save_value(conn, key, &self.subject_teachers),
            Collection::Students => store::save_value(conn, key, &self.students),
            Collection::StudentTransfers => store::save_value(conn, key, &self.student_transfers),
            Collection::StudentAttendance => store::save_value(conn, key, &self.student_attendance),
            Collection::TeacherAttendance => store::save_value(conn, key, &self.teacher_attendance),
            Collection::StudentAchievements => {
                store::save_value(conn, key, &self.student_achievements)
            }
            Collection::StudentViolations => store::save_value(conn, key, &self.student_violations),
            Collection::Users => store::save_value(conn, key, &self.users),
            Collection::CalendarEvents => store::save_value(conn, key, &self.calendar_events),
        }
    }

    pub fn save_all(&self, conn: &Connection) -> AppResult<()> {
        for c in Collection::ALL {
            self.save(conn, c)?;
        }
        Ok(())
    }

    // ---------------------------
    // Lookups shared by the page controllers
    // ---------------------------

    pub fn class_name(&self, class_id: i64) -> &str {
        self.classes
            .iter()
            .find(|c| c.id == class_id)
            .map(|c| c.name.as_str())
            .unwrap_or("N/A")
    }

    pub fn teacher_name(&self, teacher_id: i64) -> &str {
        self.teachers
            .iter()
            .find(|t| t.id == teacher_id)
            .map(|t| t.name.as_str())
            .unwrap_or("N/A")
    }

    pub fn subject_name(&self, subject_id: i64) -> &str {
        self.subjects
            .iter()
            .find(|s| s.id == subject_id)
            .map(|s| s.name.as_str())
            .unwrap_or("N/A")
    }

    pub fn student_name(&self, student_id: i64) -> &str {
        self.students
            .iter()
            .find(|s| s.id == student_id)
            .map(|s| s.name.as_str())
            .unwrap_or("N/A")
    }

    pub fn active_student_count(&self) -> usize {
        self.students.iter().filter(|s| s.is_active()).count()
    }
}
