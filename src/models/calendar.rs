use super::enums::CalendarStatus;
use super::{impl_record, is_blank};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i64,
    pub date: NaiveDate,
    pub title: String,
    pub status: CalendarStatus,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub description: Option<String>,
}

impl_record!(CalendarEvent, "Calendar event");
