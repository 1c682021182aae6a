use super::{impl_record, is_blank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    /// SHA-256 hex digest, never the clear password.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub password_hash: Option<String>,
}

impl_record!(User, "User");
