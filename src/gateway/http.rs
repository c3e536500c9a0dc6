use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;

use super::{join_url, ApiTransport, Method, QueryParams};
use crate::config::ApiConfig;
use crate::error::GatewayError;

/// Blocking HTTP transport to the REST API.
pub struct HttpTransport {
    base_url: String,
    client: Client,
    timeout_secs: u64,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GatewayError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.strip_suffix('/').unwrap_or(base_url).to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, GatewayError> {
        Self::new(&config.base_url, config.timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_connect() {
            GatewayError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            GatewayError::Timeout(self.timeout_secs)
        } else {
            GatewayError::HttpClient(e.to_string())
        }
    }

    /// Send the request and return the raw body of a successful response.
    fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> Result<String, GatewayError> {
        tracing::debug!(%method, path, "API request");

        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::debug!(%method, path, status = status.as_u16(), "API error response");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .map_err(|e| GatewayError::ResponseParsing(e.to_string()))
    }

    fn execute_json(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Value, GatewayError> {
        let body = self.execute(method, path, request)?;
        parse_body(&body)
    }
}

/// An empty body reads as `null`.
fn parse_body(body: &str) -> Result<Value, GatewayError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| GatewayError::ResponseParsing(e.to_string()))
}

impl ApiTransport for HttpTransport {
    fn get(&self, path: &str, query: &QueryParams) -> Result<Value, GatewayError> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        self.execute_json(Method::Get, path, request)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        let request = self.client.post(self.url(path)).json(body);
        self.execute_json(Method::Post, path, request)
    }

    fn put(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        let request = self.client.put(self.url(path)).json(body);
        self.execute_json(Method::Put, path, request)
    }

    fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let request = self.client.delete(self.url(path));
        self.execute(Method::Delete, path, request).map(|_| ())
    }
}
