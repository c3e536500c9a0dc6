use crate::error::GatewayError;

/// Application-level constants
pub const APP_NAME: &str = "Clinic Admin";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the REST API base URL.
pub const API_URL_ENV: &str = "CLINIC_API_URL";
/// Environment variable holding the request timeout, in seconds.
pub const API_TIMEOUT_ENV: &str = "CLINIC_API_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size for the patients, professionals and services lists.
pub const LIST_PAGE_SIZE: u32 = 20;
/// Page size for the dashboard's service fetch.
pub const DASHBOARD_PAGE_SIZE: u32 = 50;
/// Page size for the patient/professional selectors on the services screen.
pub const OPTIONS_PAGE_SIZE: u32 = 100;

/// Quiet period before a search keystroke triggers a filter recompute.
pub const SEARCH_DEBOUNCE_MS: u64 = 200;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "clinic_admin_lib=info,warn"
}

/// Connection settings for the REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to the defaults; set-but-invalid keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            let url = url.trim();
            if url.is_empty() {
                return Err(GatewayError::InvalidConfig(format!("{API_URL_ENV} is empty")));
            }
            config.base_url = url.to_string();
        }

        if let Some(raw) = lookup(API_TIMEOUT_ENV) {
            config.timeout_secs = raw.trim().parse().map_err(|_| {
                GatewayError::InvalidConfig(format!("{API_TIMEOUT_ENV} is not a number: {raw}"))
            })?;
        }

        Ok(config)
    }
}
