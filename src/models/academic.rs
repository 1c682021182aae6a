use super::impl_record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub homeroom_teacher_id: i64,
}

/// Teaching assignment: who teaches which subject in which class, and how
/// many meetings per week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectTeacher {
    pub id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub class_id: i64,
    pub meetings: u32,
}

impl_record!(Subject, "Subject");
impl_record!(Class, "Class");
impl_record!(SubjectTeacher, "Subject assignment");
