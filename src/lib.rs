pub mod coerce;
pub mod config;
pub mod datetime;
pub mod debounce;
pub mod drawer;
pub mod error;
pub mod filter;
pub mod forms;
pub mod gateway;
pub mod kpi;
pub mod models;
pub mod pages;

use tracing_subscriber::EnvFilter;

use crate::config::ApiConfig;
use crate::error::GatewayError;
use crate::gateway::HttpTransport;
use crate::pages::DashboardPage;

/// Load the dashboard from the configured API and print its counters as JSON.
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    match print_dashboard() {
        Ok(()) => {}
        Err(e) => {
            tracing::error!(error = %e, "Dashboard unavailable");
            std::process::exit(1);
        }
    }
}

fn print_dashboard() -> Result<(), GatewayError> {
    let config = ApiConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "Using API");

    let transport = HttpTransport::from_config(&config)?;
    let mut dashboard = DashboardPage::new();
    dashboard.load_today(&transport)?;

    let output = serde_json::to_string_pretty(&dashboard.kpis())
        .map_err(|e| GatewayError::ResponseParsing(e.to_string()))?;
    println!("{output}");
    Ok(())
}
