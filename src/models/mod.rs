pub mod enums;
pub mod pagination;
pub mod patient;
pub mod professional;
pub mod service;

pub use enums::*;
pub use pagination::*;
pub use patient::*;
pub use professional::*;
pub use service::*;

/// An entity kind served by the REST API under a fixed base path.
pub trait Entity: serde::de::DeserializeOwned + Clone {
    /// Base path of the resource, without slashes.
    const RESOURCE: &'static str;

    fn id(&self) -> Option<i64>;

    /// Text shown in the delete confirmation prompt.
    fn delete_prompt(&self) -> String;
}

impl Entity for Patient {
    const RESOURCE: &'static str = "patients";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn delete_prompt(&self) -> String {
        format!("Remover paciente \"{}\"?", self.name)
    }
}

impl Entity for Professional {
    const RESOURCE: &'static str = "professionals";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn delete_prompt(&self) -> String {
        format!("Remover profissional \"{}\"?", self.name)
    }
}

impl Entity for Service {
    const RESOURCE: &'static str = "services";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn delete_prompt(&self) -> String {
        "Remover agendamento?".to_string()
    }
}
