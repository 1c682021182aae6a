use super::enums::{AchievementLevel, Sanction, ViolationLevel};
use super::impl_record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAchievement {
    pub id: i64,
    pub student_id: i64,
    pub achievement_name: String,
    pub level: AchievementLevel,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentViolation {
    pub id: i64,
    pub student_id: i64,
    pub violation_name: String,
    pub level: ViolationLevel,
    pub date: NaiveDate,
    pub sanction: Sanction,
}

impl_record!(StudentAchievement, "Achievement");
impl_record!(StudentViolation, "Violation");
