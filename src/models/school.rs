use super::enums::{SchoolDays, SchoolLevel};
use serde::{Deserialize, Serialize};

/// School identity (singleton collection `school`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: i64,
    pub npsn: String,
    pub name: String,
    pub level: SchoolLevel,
    pub headmaster: String,
    pub vice_headmaster: String,
    pub address: String,
    #[serde(default)]
    pub logo: String,
    pub format: SchoolDays,
}

impl Default for School {
    fn default() -> Self {
        Self {
            id: 1,
            npsn: String::new(),
            name: String::new(),
            level: SchoolLevel::Smk,
            headmaster: String::new(),
            vice_headmaster: String::new(),
            address: String::new(),
            logo: String::new(),
            format: SchoolDays::Five,
        }
    }
}
