use serde::{Deserialize, Serialize};

use crate::coerce::deserialize_null_string;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub specialty: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub contact_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
