use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use super::{ApiTransport, QueryParams};
use crate::error::GatewayError;
use crate::models::{Entity, PaginatedResponse};

/// Typed CRUD access to one entity kind under its base path.
pub struct Resource<'a, E> {
    transport: &'a dyn ApiTransport,
    _entity: PhantomData<E>,
}

impl<'a, E: Entity> Resource<'a, E> {
    pub fn new(transport: &'a dyn ApiTransport) -> Self {
        Self {
            transport,
            _entity: PhantomData,
        }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{}", E::RESOURCE, id)
    }

    /// `GET <base>?page=P&per_page=N`
    pub fn list(&self, page: u32, per_page: u32) -> Result<PaginatedResponse<E>, GatewayError> {
        let query = QueryParams::new().with("page", page).with("per_page", per_page);
        let value = self.transport.get(E::RESOURCE, &query)?;
        if value.is_null() {
            return Ok(PaginatedResponse {
                data: Vec::new(),
                meta: None,
            });
        }
        decode(value)
    }

    /// `GET <base>/<id>`
    pub fn get(&self, id: i64) -> Result<E, GatewayError> {
        let value = self.transport.get(&Self::item_path(id), &QueryParams::new())?;
        decode_single(value)?.ok_or_else(|| {
            GatewayError::ResponseParsing(format!("empty body for {}", Self::item_path(id)))
        })
    }

    /// `POST <base>`. Returns the created entity when the API echoes it.
    pub fn create<P: Serialize>(&self, payload: &P) -> Result<Option<E>, GatewayError> {
        let body = encode(payload)?;
        let value = self.transport.post(E::RESOURCE, &body)?;
        tracing::info!(resource = E::RESOURCE, "created");
        decode_single(value)
    }

    /// `PUT <base>/<id>` with a full or partial body.
    pub fn update<P: Serialize>(&self, id: i64, payload: &P) -> Result<Option<E>, GatewayError> {
        let body = encode(payload)?;
        let value = self.transport.put(&Self::item_path(id), &body)?;
        tracing::info!(resource = E::RESOURCE, id, "updated");
        decode_single(value)
    }

    /// `DELETE <base>/<id>`
    pub fn remove(&self, id: i64) -> Result<(), GatewayError> {
        self.transport.delete(&Self::item_path(id))?;
        tracing::info!(resource = E::RESOURCE, id, "removed");
        Ok(())
    }
}

fn encode<P: Serialize>(payload: &P) -> Result<Value, GatewayError> {
    serde_json::to_value(payload).map_err(|e| GatewayError::RequestEncoding(e.to_string()))
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, GatewayError> {
    serde_json::from_value(value).map_err(|e| GatewayError::ResponseParsing(e.to_string()))
}

/// Single-entity body: bare object, `{"data": {...}}` envelope, or empty.
fn decode_single<E: Entity>(value: Value) -> Result<Option<E>, GatewayError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
            let inner = map.remove("data").unwrap_or(Value::Null);
            decode(inner).map(Some)
        }
        other => decode(other).map(Some),
    }
}
