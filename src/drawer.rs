//! Create/edit form drawer: `Closed → Creating | Editing → Closed`.

use crate::forms::EntityForm;
use crate::models::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Creating,
    Editing,
}

/// Drawer state plus the form it owns and the entity being edited.
#[derive(Clone)]
pub struct Drawer<F: EntityForm> {
    state: DrawerState,
    form: F,
    editing: Option<F::Entity>,
}

impl<F: EntityForm> Default for Drawer<F> {
    fn default() -> Self {
        Self {
            state: DrawerState::Closed,
            form: F::default(),
            editing: None,
        }
    }
}

impl<F: EntityForm> Drawer<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != DrawerState::Closed
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn editing(&self) -> Option<&F::Entity> {
        self.editing.as_ref()
    }

    /// Id of the edited entity; `None` when creating or when the entity
    /// was never persisted.
    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().and_then(|e| e.id())
    }

    /// Open with a blank form.
    pub fn start_create(&mut self) {
        self.editing = None;
        self.form = F::default();
        self.state = DrawerState::Creating;
    }

    /// Open with the form populated from `entity`.
    pub fn start_edit(&mut self, entity: &F::Entity) {
        self.form = F::from_entity(entity);
        self.editing = Some(entity.clone());
        self.state = DrawerState::Editing;
    }

    /// Close without saving.
    pub fn cancel(&mut self) {
        self.editing = None;
        self.state = DrawerState::Closed;
    }

    /// Escape key. Returns whether the drawer was open.
    pub fn escape(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.cancel();
        true
    }

    /// Close after a successful save and reset the form.
    pub fn finish_saved(&mut self) {
        self.cancel();
        self.form = F::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{PatientForm, ServiceForm};
    use crate::models::{Patient, Service, ServiceStatus};

    fn stored_patient() -> Patient {
        Patient {
            id: Some(5),
            name: "Ana".into(),
            birth_date: "1990-01-01".into(),
            address: "Rua A".into(),
            contact_info: "1111".into(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_closed() {
        let drawer: Drawer<PatientForm> = Drawer::new();
        assert_eq!(drawer.state(), DrawerState::Closed);
        assert!(!drawer.is_open());
        assert!(drawer.editing().is_none());
    }

    #[test]
    fn create_resets_form() {
        let mut drawer: Drawer<PatientForm> = Drawer::new();
        drawer.start_edit(&stored_patient());
        drawer.start_create();
        assert_eq!(drawer.state(), DrawerState::Creating);
        assert_eq!(drawer.form(), &PatientForm::default());
        assert_eq!(drawer.editing_id(), None);
    }

    #[test]
    fn create_defaults_service_status() {
        let mut drawer: Drawer<ServiceForm> = Drawer::new();
        drawer.form_mut().status = ServiceStatus::Cancelled;
        drawer.start_create();
        assert_eq!(drawer.form().status, ServiceStatus::Scheduled);
    }

    #[test]
    fn edit_populates_form() {
        let mut drawer: Drawer<PatientForm> = Drawer::new();
        drawer.start_edit(&stored_patient());
        assert_eq!(drawer.state(), DrawerState::Editing);
        assert_eq!(drawer.form().name, "Ana");
        assert_eq!(drawer.editing_id(), Some(5));
    }

    #[test]
    fn edit_of_unsaved_entity_has_no_id() {
        let mut drawer: Drawer<ServiceForm> = Drawer::new();
        drawer.start_edit(&Service::default());
        assert!(drawer.is_open());
        assert_eq!(drawer.editing_id(), None);
    }

    #[test]
    fn cancel_clears_editing() {
        let mut drawer: Drawer<PatientForm> = Drawer::new();
        drawer.start_edit(&stored_patient());
        drawer.cancel();
        assert_eq!(drawer.state(), DrawerState::Closed);
        assert!(drawer.editing().is_none());
    }

    #[test]
    fn escape_only_acts_when_open() {
        let mut drawer: Drawer<PatientForm> = Drawer::new();
        assert!(!drawer.escape());

        drawer.start_create();
        drawer.form_mut().name = "rascunho".into();
        assert!(drawer.escape());
        assert!(!drawer.is_open());
    }

    #[test]
    fn finish_saved_resets_everything() {
        let mut drawer: Drawer<PatientForm> = Drawer::new();
        drawer.start_edit(&stored_patient());
        drawer.finish_saved();
        assert!(!drawer.is_open());
        assert!(drawer.editing().is_none());
        assert_eq!(drawer.form(), &PatientForm::default());
    }
}
