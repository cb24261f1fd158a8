//! Success responses.
//!
//! Every 2xx JSON body carries a `timestamp` of when it was produced. Error bodies never do,
//! and the stamp is never written back to the store.

use super::error::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// A successful JSON response whose body gets stamped on the way out.
#[derive(Debug)]
pub struct Timestamped<T> {
    status: StatusCode,
    body: T,
}

impl<T> Timestamped<T> {
    pub fn ok(body: T) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn created(body: T) -> Self {
        Self::with_status(StatusCode::CREATED, body)
    }

    pub fn with_status(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }
}

impl<T: Serialize> IntoResponse for Timestamped<T> {
    fn into_response(self) -> Response {
        let mut body = match serde_json::to_value(&self.body) {
            Ok(body) => body,
            Err(e) => return ApiError::Internal(e.to_string()).into_response(),
        };
        stamp(&mut body, &now());
        (self.status, Json(body)).into_response()
    }
}

/// The current instant as RFC 3339 UTC with milliseconds, e.g. `2024-01-15T10:30:00.000Z`.
pub fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Adds `timestamp` to an object body, or to every object element of an array body.
pub fn stamp(body: &mut Value, timestamp: &str) {
    match body {
        Value::Object(fields) => {
            fields.insert("timestamp".to_string(), Value::String(timestamp.to_string()));
        }
        Value::Array(items) => {
            for item in items.iter_mut().filter(|item| item.is_object()) {
                stamp(item, timestamp);
            }
        }
        _ => {}
    }
}
