use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use serde_json::Value;

use super::{ApiTransport, Method, QueryParams};
use crate::error::GatewayError;

/// Canned answer for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum MockReply {
    Json(Value),
    Failure { status: u16, body: String },
    Unreachable,
}

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// In-memory transport for tests. Answers from configured replies and
/// records every request.
///
/// Replies queue per (method, path); the last queued reply is sticky.
/// A request with no configured reply fails with status 404.
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<HashMap<(Method, String), VecDeque<MockReply>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, method: Method, path: &str, reply: MockReply) -> &Self {
        self.replies
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn on_json(&self, method: Method, path: &str, body: Value) -> &Self {
        self.on(method, path, MockReply::Json(body))
    }

    /// Drop every queued reply for (method, path).
    pub fn clear(&self, method: Method, path: &str) {
        self.replies.borrow_mut().remove(&(method, path.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.borrow().last().cloned()
    }

    fn answer(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            path: path.to_string(),
            query,
            body,
        });

        let reply = {
            let mut replies = self.replies.borrow_mut();
            match replies.get_mut(&(method, path.to_string())) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match reply {
            Some(MockReply::Json(value)) => Ok(value),
            Some(MockReply::Failure { status, body }) => Err(GatewayError::Api { status, body }),
            Some(MockReply::Unreachable) => Err(GatewayError::Connection("mock".into())),
            None => Err(GatewayError::Api {
                status: 404,
                body: format!("no mock reply for {method} {path}"),
            }),
        }
    }
}

impl ApiTransport for MockTransport {
    fn get(&self, path: &str, query: &QueryParams) -> Result<Value, GatewayError> {
        self.answer(Method::Get, path, query.pairs().to_vec(), None)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        self.answer(Method::Post, path, Vec::new(), Some(body.clone()))
    }

    fn put(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        self.answer(Method::Put, path, Vec::new(), Some(body.clone()))
    }

    fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.answer(Method::Delete, path, Vec::new(), None).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replies_queue_and_last_is_sticky() {
        let mock = MockTransport::new();
        mock.on_json(Method::Get, "patients", json!(1))
            .on_json(Method::Get, "patients", json!(2));

        let q = QueryParams::new();
        assert_eq!(mock.get("patients", &q).unwrap(), json!(1));
        assert_eq!(mock.get("patients", &q).unwrap(), json!(2));
        assert_eq!(mock.get("patients", &q).unwrap(), json!(2));
        assert_eq!(mock.count(Method::Get, "patients"), 3);
    }

    #[test]
    fn unconfigured_request_is_404() {
        let mock = MockTransport::new();
        let err = mock.delete("patients/1").unwrap_err();
        assert!(matches!(err, GatewayError::Api { status: 404, .. }));
        assert_eq!(mock.last_request().unwrap().method, Method::Delete);
    }

    #[test]
    fn records_bodies_and_queries() {
        let mock = MockTransport::new();
        mock.on_json(Method::Post, "services", json!({"id": 1}));
        mock.post("services", &json!({"status": "Agendado"})).unwrap();
        mock.get("services", &QueryParams::new().with("page", 1)).unwrap_err();

        let requests = mock.requests();
        assert_eq!(requests[0].body, Some(json!({"status": "Agendado"})));
        assert_eq!(requests[1].query, vec![("page".to_string(), "1".to_string())]);
    }
}
