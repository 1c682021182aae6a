use super::enums::{Gender, StudentStatus, TransferReason};
use super::{impl_record, is_blank};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub nisn: String,
    pub name: String,
    pub gender: Gender,
    pub status: StudentStatus,
    pub entry_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub whatsapp: Option<String>,
    pub class_id: i64,
}

impl Student {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Transfer-out ("mutasi") of a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentTransfer {
    pub id: i64,
    pub student_id: i64,
    pub exit_date: NaiveDate,
    pub reason: TransferReason,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub notes: Option<String>,
}

impl_record!(Student, "Student");
impl_record!(StudentTransfer, "Transfer");
