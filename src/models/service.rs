use serde::{Deserialize, Serialize};

use super::enums::ServiceStatus;
use super::patient::Patient;
use super::professional::Professional;
use crate::coerce::{deserialize_lenient_id, deserialize_null_string};

/// A scheduled service (appointment) as returned by the API.
///
/// `status` keeps the raw wire label so that a value outside
/// [`ServiceStatus`] still deserializes; use [`Service::status`] for the
/// typed view. The embedded `patient`/`professional` snapshots are
/// read-only and never submitted back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub patient_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub professional_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub service_type: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub scheduled_date: String,
    #[serde(rename = "status", default, deserialize_with = "deserialize_null_string")]
    pub raw_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<Patient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional: Option<Professional>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Service {
    /// Typed status, `None` for labels outside the closed set.
    pub fn status(&self) -> Option<ServiceStatus> {
        self.raw_status.parse().ok()
    }

    pub fn patient_name(&self) -> &str {
        self.patient.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    pub fn professional_name(&self) -> &str {
        self.professional.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    pub fn professional_specialty(&self) -> &str {
        self.professional
            .as_ref()
            .map(|p| p.specialty.as_str())
            .unwrap_or("")
    }

    /// Bare `patient_id`, else the embedded patient's id.
    pub fn resolved_patient_id(&self) -> Option<i64> {
        self.patient_id
            .or_else(|| self.patient.as_ref().and_then(|p| p.id))
    }

    /// Bare `professional_id`, else the embedded professional's id.
    pub fn resolved_professional_id(&self) -> Option<i64> {
        self.professional_id
            .or_else(|| self.professional.as_ref().and_then(|p| p.id))
    }
}
