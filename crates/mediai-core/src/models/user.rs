use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The single signed-in user, mirrored into client-local storage.
///
/// Stored as `{id, displayName, email, avatarUrl}`: camelCase field names,
/// absent display fields as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserRecord {
    /// Parse a stored record. An empty `id` is rejected: a record without an
    /// identity cannot represent a session.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let record: UserRecord = serde_json::from_str(raw)?;
        if record.id.trim().is_empty() {
            return Err(CoreError::MissingField("id".to_string()));
        }
        Ok(record)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
