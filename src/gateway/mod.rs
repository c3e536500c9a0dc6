//! Remote Data Gateway: raw JSON transport plus typed per-entity resources.

pub mod http;
pub mod mock;
pub mod resource;

pub use http::*;
pub use mock::*;
pub use resource::*;

use serde_json::Value;

use crate::error::GatewayError;

/// HTTP verbs used by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Query string parameters. Empty values are never added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    pub fn with_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Join a base URL and a resource path with exactly one `/`.
///
/// One trailing slash is stripped from `base`, leading slashes from `path`.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// JSON transport to the REST API.
///
/// `HttpTransport` is the production implementation; `MockTransport`
/// answers from memory for tests.
pub trait ApiTransport {
    fn get(&self, path: &str, query: &QueryParams) -> Result<Value, GatewayError>;

    fn post(&self, path: &str, body: &Value) -> Result<Value, GatewayError>;

    fn put(&self, path: &str, body: &Value) -> Result<Value, GatewayError>;

    fn delete(&self, path: &str) -> Result<(), GatewayError>;
}
