use std::time::Instant;

use crate::config::{LIST_PAGE_SIZE, OPTIONS_PAGE_SIZE};
use crate::error::{GatewayError, PageError};
use crate::filter::ServiceQuery;
use crate::forms::ServiceForm;
use crate::gateway::{ApiTransport, Resource};
use crate::models::{Patient, Professional, Service, ServiceStatus};

use super::ListPage;

/// Services screen: the service list plus the patient and professional
/// options offered by the form's selectors.
pub struct ServicesPage {
    list: ListPage<ServiceForm, ServiceQuery>,
    patients: Vec<Patient>,
    professionals: Vec<Professional>,
}

impl Default for ServicesPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ServicesPage {
    pub fn new() -> Self {
        Self {
            list: ListPage::new(LIST_PAGE_SIZE),
            patients: Vec::new(),
            professionals: Vec::new(),
        }
    }

    pub fn list(&self) -> &ListPage<ServiceForm, ServiceQuery> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListPage<ServiceForm, ServiceQuery> {
        &mut self.list
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn filtered(&self) -> &[Service] {
        self.list.filtered()
    }

    /// Screen entry: selector options, then the first page of services.
    ///
    /// Option loads fail independently and leave their list empty.
    pub fn open(&mut self, transport: &dyn ApiTransport) -> Result<(), GatewayError> {
        self.load_options(transport);
        self.list.load(transport, 1)
    }

    pub fn load_options(&mut self, transport: &dyn ApiTransport) {
        match Resource::<Patient>::new(transport).list(1, OPTIONS_PAGE_SIZE) {
            Ok(res) => self.patients = res.data,
            Err(e) => tracing::warn!(error = %e, "Patient options unavailable"),
        }
        match Resource::<Professional>::new(transport).list(1, OPTIONS_PAGE_SIZE) {
            Ok(res) => self.professionals = res.data,
            Err(e) => tracing::warn!(error = %e, "Professional options unavailable"),
        }
    }

    pub fn load(&mut self, transport: &dyn ApiTransport, page: u32) -> Result<(), GatewayError> {
        self.list.load(transport, page)
    }

    /// Status selector. Applies immediately; `None` shows every status.
    pub fn set_status(&mut self, status: Option<ServiceStatus>) {
        self.list.update_criteria(|c| c.status = status);
    }

    pub fn status(&self) -> Option<ServiceStatus> {
        self.list.criteria().status
    }

    pub fn set_query(&mut self, text: &str) {
        self.list.set_query(text);
    }

    pub fn type_query(&mut self, text: &str, now: Instant) {
        self.list.type_query(text, now);
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.list.tick(now)
    }

    pub fn start_create(&mut self) {
        self.list.start_create();
    }

    pub fn start_edit(&mut self, service: &Service) {
        self.list.start_edit(service);
    }

    pub fn escape(&mut self) -> bool {
        self.list.escape()
    }

    pub fn save(&mut self, transport: &dyn ApiTransport) -> Result<(), PageError> {
        self.list.save(transport)
    }

    pub fn remove<P>(&mut self, transport: &dyn ApiTransport, service: &Service, confirm: P) -> Result<bool, PageError>
    where
        P: FnOnce(&str) -> bool,
    {
        self.list.remove(transport, service, confirm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{Method, MockReply, MockTransport};
    use serde_json::{json, Value};

    fn services_body() -> Value {
        json!({
            "data": [
                {
                    "id": 1, "patient_id": 1, "professional_id": 1,
                    "service_type": "Consulta", "scheduled_date": "2024-03-05T09:00:00",
                    "status": "Agendado",
                    "patient": {"id": 1, "name": "Ana Souza"},
                    "professional": {"id": 1, "name": "Dr. Lima", "specialty": "Ortopedia"}
                },
                {
                    "id": 2, "patient_id": "2", "professional_id": 2,
                    "service_type": "Exame", "scheduled_date": "2024-03-04 10:00:00",
                    "status": "Concluído",
                    "patient": {"id": 2, "name": "Bruno Costa"},
                    "professional": {"id": 2, "name": "Dra. Reis", "specialty": "Cardiologia"}
                },
                {
                    "id": 3,
                    "service_type": "Retorno", "scheduled_date": "2024-03-06",
                    "status": "Agendado",
                    "patient": {"id": 1, "name": "Ana Souza"},
                    "professional": {"id": 2, "name": "Dra. Reis", "specialty": "Cardiologia"}
                }
            ],
            "meta": {"current_page": 1, "last_page": 1, "total": 3}
        })
    }

    fn opened(mock: &MockTransport) -> ServicesPage {
        mock.on_json(Method::Get, "services", services_body());
        mock.on_json(Method::Get, "patients", json!({"data": [{"id": 1, "name": "Ana Souza"}]}));
        mock.on_json(Method::Get, "professionals", json!({"data": [{"id": 1, "name": "Dr. Lima"}]}));
        let mut page = ServicesPage::new();
        page.open(mock).unwrap();
        page
    }

    #[test]
    fn open_loads_options_with_large_page() {
        let mock = MockTransport::new();
        let page = opened(&mock);

        assert_eq!(page.patients().len(), 1);
        assert_eq!(page.professionals().len(), 1);
        assert_eq!(page.filtered().len(), 3);

        let options = mock
            .requests()
            .into_iter()
            .find(|r| r.path == "patients")
            .unwrap();
        assert_eq!(options.query[1], ("per_page".to_string(), "100".to_string()));
    }

    #[test]
    fn option_failure_does_not_block_list() {
        let mock = MockTransport::new();
        mock.on_json(Method::Get, "services", services_body());
        mock.on(Method::Get, "patients", MockReply::Unreachable);
        mock.on_json(Method::Get, "professionals", json!({"data": []}));

        let mut page = ServicesPage::new();
        page.open(&mock).unwrap();
        assert!(page.patients().is_empty());
        assert_eq!(page.filtered().len(), 3);
    }

    #[test]
    fn status_and_text_filters_combine() {
        let mock = MockTransport::new();
        let mut page = opened(&mock);

        page.set_status(Some(ServiceStatus::Scheduled));
        assert_eq!(page.filtered().len(), 2);

        page.set_query("reis");
        assert_eq!(page.filtered().len(), 1);
        assert_eq!(page.filtered()[0].id, Some(3));

        page.set_status(None);
        assert_eq!(page.filtered().len(), 2);
        assert_eq!(page.status(), None);
    }

    #[test]
    fn edit_then_save_submits_coerced_payload() {
        let mock = MockTransport::new();
        let mut page = opened(&mock);
        mock.on_json(Method::Put, "services/3", Value::Null);

        let third = page.list().items()[2].clone();
        page.start_edit(&third);
        {
            let form = page.list().drawer().form();
            assert_eq!(form.patient_id, Some(1));
            assert_eq!(form.professional_id, Some(2));
            assert_eq!(form.scheduled_date, "2024-03-06T00:00");
        }
        page.list_mut().drawer_mut().form_mut().scheduled_date = "2024-03-07T15:45".into();
        page.save(&mock).unwrap();

        let put = mock
            .requests()
            .into_iter()
            .find(|r| r.method == Method::Put)
            .unwrap();
        assert_eq!(
            put.body.unwrap(),
            json!({
                "patient_id": 1,
                "professional_id": 2,
                "service_type": "Retorno",
                "scheduled_date": "2024-03-07T15:45:00",
                "status": "Agendado"
            })
        );
        assert!(!page.list().drawer().is_open());
    }

    #[test]
    fn create_uses_scheduled_default() {
        let mock = MockTransport::new();
        let mut page = opened(&mock);
        mock.on_json(Method::Post, "services", json!({"id": 4}));

        page.start_create();
        {
            let form = page.list_mut().drawer_mut().form_mut();
            form.set_patient_id(&json!("1"));
            form.set_professional_id(&json!(1));
            form.service_type = "Consulta".into();
            form.scheduled_date = "2024-03-08T08:00".into();
        }
        page.save(&mock).unwrap();

        let post = mock.requests().into_iter().find(|r| r.method == Method::Post).unwrap();
        assert_eq!(post.body.unwrap()["status"], json!("Agendado"));
    }

    #[test]
    fn delete_prompt_is_generic() {
        let mock = MockTransport::new();
        let mut page = opened(&mock);
        let first = page.list().items()[0].clone();

        let mut seen = String::new();
        page.remove(&mock, &first, |p| {
            seen = p.to_string();
            false
        })
        .unwrap();
        assert_eq!(seen, "Remover agendamento?");
    }
}
