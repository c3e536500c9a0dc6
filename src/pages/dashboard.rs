use chrono::{Local, NaiveDate};

use crate::config::DASHBOARD_PAGE_SIZE;
use crate::error::GatewayError;
use crate::gateway::{ApiTransport, Resource};
use crate::kpi::{aggregate, DashboardKpis};
use crate::models::Service;

/// Dashboard: KPI counters over one page of services, plus that page.
#[derive(Debug, Default)]
pub struct DashboardPage {
    items: Vec<Service>,
    kpis: DashboardKpis,
    loading: bool,
    last_error: Option<String>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kpis(&self) -> DashboardKpis {
        self.kpis
    }

    /// Services of the loaded page, in API order.
    pub fn items(&self) -> &[Service] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fetch `page` and recompute the counters against `today`.
    ///
    /// On failure the previous items and counters stay in place.
    pub fn load_page(
        &mut self,
        transport: &dyn ApiTransport,
        page: u32,
        today: NaiveDate,
    ) -> Result<(), GatewayError> {
        self.loading = true;

        match Resource::<Service>::new(transport).list(page, DASHBOARD_PAGE_SIZE) {
            Ok(response) => {
                self.items = response.data;
                self.kpis = aggregate(&self.items, today);
                self.last_error = None;
                self.loading = false;
                tracing::debug!(kpis = ?self.kpis, services = self.items.len(), "Dashboard loaded");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dashboard load failed; keeping displayed counters");
                self.last_error = Some(e.to_string());
                self.loading = false;
                Err(e)
            }
        }
    }

    pub fn load(&mut self, transport: &dyn ApiTransport, today: NaiveDate) -> Result<(), GatewayError> {
        self.load_page(transport, 1, today)
    }

    /// [`Self::load`] against the local clock's current day.
    pub fn load_today(&mut self, transport: &dyn ApiTransport) -> Result<(), GatewayError> {
        self.load(transport, Local::now().date_naive())
    }
}
