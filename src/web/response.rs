//! Success response shapes.
//!
//! Mutations answer with `{"message": ..., "<entity_key>": {...}}`, deletes
//! with `{"message": ...}`. Reads return the bare record or list.

use crate::error::WebError;
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::{json, Map, Value};

pub fn with_entity<T>(
    status: StatusCode,
    message: &str,
    entity_key: &str,
    entity: &T,
) -> Result<HttpResponse, WebError>
where
    T: Serialize,
{
    let serialized =
        serde_json::to_value(entity).map_err(|err| WebError::Internal(err.to_string()))?;
    let mut body = Map::new();
    body.insert("message".to_owned(), Value::String(message.to_owned()));
    body.insert(entity_key.to_owned(), serialized);
    Ok(HttpResponse::build(status).json(Value::Object(body)))
}

pub fn message(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": message }))
}
