//! Screen controllers. Each page owns its fetched page, filtered view,
//! loading flag and form drawer; nothing is shared between pages.
//!
//! Every successful mutation is followed by a refetch instead of patching
//! local state. A failed list load keeps the previously displayed items,
//! clears the loading flag and records the error for a retry affordance.

pub mod dashboard;
pub mod services;

pub use dashboard::*;
pub use services::*;

use std::time::{Duration, Instant};

use crate::config::{LIST_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use crate::debounce::Debouncer;
use crate::drawer::Drawer;
use crate::error::{GatewayError, PageError};
use crate::filter::{FilterCriteria, TextQuery};
use crate::forms::{EntityForm, PatientForm, ProfessionalForm};
use crate::gateway::{ApiTransport, Resource};
use crate::models::Entity;

pub type PatientsPage = ListPage<PatientForm, TextQuery>;
pub type ProfessionalsPage = ListPage<ProfessionalForm, TextQuery>;

/// A paginated, searchable list with a create/edit drawer.
pub struct ListPage<F: EntityForm, C> {
    page: u32,
    per_page: u32,
    last_page: u32,
    total: u64,
    items: Vec<F::Entity>,
    filtered: Vec<F::Entity>,
    loading: bool,
    last_error: Option<String>,
    criteria: C,
    search: Debouncer<String>,
    drawer: Drawer<F>,
}

impl<F, C> Default for ListPage<F, C>
where
    F: EntityForm,
    C: FilterCriteria<F::Entity>,
{
    fn default() -> Self {
        Self::new(LIST_PAGE_SIZE)
    }
}

impl<F, C> ListPage<F, C>
where
    F: EntityForm,
    C: FilterCriteria<F::Entity>,
{
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            last_page: 1,
            total: 0,
            items: Vec::new(),
            filtered: Vec::new(),
            loading: false,
            last_error: None,
            criteria: C::default(),
            search: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            drawer: Drawer::new(),
        }
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// The whole fetched page.
    pub fn items(&self) -> &[F::Entity] {
        &self.items
    }

    /// What is rendered: the fetched page after filtering.
    pub fn filtered(&self) -> &[F::Entity] {
        &self.filtered
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed list load, cleared by a successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    pub fn drawer(&self) -> &Drawer<F> {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut Drawer<F> {
        &mut self.drawer
    }

    // ── Loading ─────────────────────────────────────────────

    /// Fetch `page` and refilter.
    pub fn load(&mut self, transport: &dyn ApiTransport, page: u32) -> Result<(), GatewayError> {
        self.loading = true;
        self.page = page;

        match Resource::<F::Entity>::new(transport).list(page, self.per_page) {
            Ok(response) => {
                self.total = response.total();
                self.last_page = response.last_page();
                self.items = response.data;
                self.last_error = None;
                self.apply_filter();
                self.loading = false;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    resource = <F::Entity as Entity>::RESOURCE,
                    page,
                    error = %e,
                    "List load failed; keeping displayed items"
                );
                self.last_error = Some(e.to_string());
                self.loading = false;
                Err(e)
            }
        }
    }

    /// Refetch the current page.
    pub fn reload(&mut self, transport: &dyn ApiTransport) -> Result<(), GatewayError> {
        self.load(transport, self.page)
    }

    /// Load the next page. Returns `false` when already on the last page.
    pub fn next_page(&mut self, transport: &dyn ApiTransport) -> Result<bool, GatewayError> {
        if self.page >= self.last_page {
            return Ok(false);
        }
        self.load(transport, self.page + 1).map(|_| true)
    }

    /// Load the previous page. Returns `false` when already on the first page.
    pub fn previous_page(&mut self, transport: &dyn ApiTransport) -> Result<bool, GatewayError> {
        if self.page <= 1 {
            return Ok(false);
        }
        self.load(transport, self.page - 1).map(|_| true)
    }

    // ── Search ──────────────────────────────────────────────

    fn apply_filter(&mut self) {
        self.filtered = self.criteria.apply(&self.items);
    }

    /// Apply a search query immediately, superseding any pending keystroke.
    pub fn set_query(&mut self, text: &str) {
        self.search.reset(text.to_string());
        self.criteria.set_text(text);
        self.apply_filter();
    }

    /// Record a keystroke; the query applies on a later [`Self::tick`].
    pub fn type_query(&mut self, text: &str, now: Instant) {
        self.search.push(text.to_string(), now);
    }

    /// Apply the typed query once it has settled. Returns whether the view changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(text) => {
                self.set_query(&text);
                true
            }
            None => false,
        }
    }

    /// When the pending keystroke settles, for scheduling the next tick.
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    pub(crate) fn update_criteria(&mut self, update: impl FnOnce(&mut C)) {
        update(&mut self.criteria);
        self.apply_filter();
    }

    // ── Drawer ──────────────────────────────────────────────

    pub fn start_create(&mut self) {
        self.drawer.start_create();
    }

    pub fn start_edit(&mut self, entity: &F::Entity) {
        self.drawer.start_edit(entity);
    }

    pub fn cancel(&mut self) {
        self.drawer.cancel();
    }

    /// Escape key: closes the drawer without saving.
    pub fn escape(&mut self) -> bool {
        self.drawer.escape()
    }

    // ── Mutations ───────────────────────────────────────────

    /// Submit the open form: update when editing a persisted entity, create
    /// otherwise. On success the drawer closes and the list reloads (current
    /// page after an update, first page after a create). On failure the
    /// drawer stays open and nothing is refetched.
    pub fn save(&mut self, transport: &dyn ApiTransport) -> Result<(), PageError> {
        if !self.drawer.is_open() {
            return Err(PageError::DrawerClosed);
        }

        let payload = self.drawer.form().to_payload()?;
        let editing_id = self.drawer.editing_id();
        let resource = Resource::<F::Entity>::new(transport);

        match editing_id {
            Some(id) => resource.update(id, &payload)?,
            None => resource.create(&payload)?,
        };

        self.drawer.finish_saved();

        let target = if editing_id.is_some() { self.page } else { 1 };
        // A failed refetch is already recorded in `last_error`.
        let _ = self.load(transport, target);
        Ok(())
    }

    /// Delete `entity` after `confirm` accepts its prompt, then reload the
    /// current page. Returns whether a delete was issued.
    pub fn remove<P>(
        &mut self,
        transport: &dyn ApiTransport,
        entity: &F::Entity,
        confirm: P,
    ) -> Result<bool, PageError>
    where
        P: FnOnce(&str) -> bool,
    {
        let Some(id) = entity.id() else {
            return Ok(false);
        };
        if !confirm(&entity.delete_prompt()) {
            return Ok(false);
        }

        Resource::<F::Entity>::new(transport).remove(id)?;

        let _ = self.reload(transport);
        Ok(true)
    }
}
