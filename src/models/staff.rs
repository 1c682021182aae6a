use super::enums::{Gender, TeacherStatus};
use super::{impl_record, is_blank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub status: TeacherStatus,
    /// Civil-servant number, mandatory for ASN teachers.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub nip: Option<String>,
}

impl_record!(Teacher, "Teacher");
