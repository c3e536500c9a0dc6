use serde::{Deserialize, Serialize};

use crate::coerce::deserialize_null_string;

/// A patient record as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub contact_info: String,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
