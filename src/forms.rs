//! Edit-form values and the submission payloads built from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::coerce_id;
use crate::datetime::{to_date_input, to_local_datetime_input, with_seconds};
use crate::error::FormError;
use crate::models::{Entity, Patient, Professional, Service, ServiceStatus};

/// A form bound to one entity kind.
///
/// `Default` is the blank state used when creating.
pub trait EntityForm: Clone + Default {
    type Entity: Entity;
    type Payload: Serialize;

    /// Populate the form from a stored entity.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Validate and build the request body.
    fn to_payload(&self) -> Result<Self::Payload, FormError>;
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Patient
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub name: String,
    pub birth_date: String,
    pub address: String,
    pub contact_info: String,
    pub diagnosis: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientPayload {
    pub name: String,
    pub birth_date: String,
    pub address: String,
    pub contact_info: String,
    pub diagnosis: Option<String>,
}

impl EntityForm for PatientForm {
    type Entity = Patient;
    type Payload = PatientPayload;

    fn from_entity(patient: &Patient) -> Self {
        Self {
            name: patient.name.clone(),
            birth_date: to_date_input(&patient.birth_date),
            address: patient.address.clone(),
            contact_info: patient.contact_info.clone(),
            diagnosis: patient.diagnosis.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<PatientPayload, FormError> {
        Ok(PatientPayload {
            name: required("name", &self.name)?,
            birth_date: required("birth_date", &self.birth_date)?,
            address: required("address", &self.address)?,
            contact_info: required("contact_info", &self.contact_info)?,
            diagnosis: optional(&self.diagnosis),
        })
    }
}

// ---------------------------------------------------------------------------
// Professional
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessionalForm {
    pub name: String,
    pub specialty: String,
    pub contact_info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalPayload {
    pub name: String,
    pub specialty: String,
    pub contact_info: String,
}

impl EntityForm for ProfessionalForm {
    type Entity = Professional;
    type Payload = ProfessionalPayload;

    fn from_entity(professional: &Professional) -> Self {
        Self {
            name: professional.name.clone(),
            specialty: professional.specialty.clone(),
            contact_info: professional.contact_info.clone(),
        }
    }

    fn to_payload(&self) -> Result<ProfessionalPayload, FormError> {
        Ok(ProfessionalPayload {
            name: required("name", &self.name)?,
            specialty: required("specialty", &self.specialty)?,
            contact_info: required("contact_info", &self.contact_info)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Service form. `scheduled_date` holds a `datetime-local` input value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub patient_id: Option<i64>,
    pub professional_id: Option<i64>,
    pub service_type: String,
    pub scheduled_date: String,
    pub status: ServiceStatus,
}

/// Request body for a service. Embedded snapshots are never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePayload {
    pub patient_id: i64,
    pub professional_id: i64,
    pub service_type: String,
    pub scheduled_date: String,
    pub status: ServiceStatus,
}

impl ServiceForm {
    /// Set the patient from a raw selector value.
    pub fn set_patient_id(&mut self, raw: &Value) {
        self.patient_id = coerce_id(raw);
    }

    /// Set the professional from a raw selector value.
    pub fn set_professional_id(&mut self, raw: &Value) {
        self.professional_id = coerce_id(raw);
    }
}

impl EntityForm for ServiceForm {
    type Entity = Service;
    type Payload = ServicePayload;

    /// Labels outside the closed status set populate as `Scheduled`.
    fn from_entity(service: &Service) -> Self {
        Self {
            patient_id: service.resolved_patient_id(),
            professional_id: service.resolved_professional_id(),
            service_type: service.service_type.clone(),
            scheduled_date: to_local_datetime_input(&service.scheduled_date),
            status: service.status().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<ServicePayload, FormError> {
        let patient_id = self.patient_id.ok_or(FormError::MissingField("patient_id"))?;
        let professional_id = self
            .professional_id
            .ok_or(FormError::MissingField("professional_id"))?;
        let service_type = required("service_type", &self.service_type)?;
        let scheduled_date = required("scheduled_date", &self.scheduled_date)?;

        Ok(ServicePayload {
            patient_id,
            professional_id,
            service_type,
            scheduled_date: with_seconds(&scheduled_date),
            status: self.status,
        })
    }
}
