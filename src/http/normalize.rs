//! Inbound body normalization.
//!
//! [`NormalizedJson`] reads the request body as JSON and lowercases the string values of the
//! fields named by the [`NormalizationPolicy`] before any handler sees them.

use super::error::ApiError;
use super::AppState;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde_json::{Map, Value};

/// Lists every top-level field when given as a field name.
pub const ALL_FIELDS: &str = "*";

/// Which top-level body fields get their string values lowercased.
///
/// Fields are matched by exact name, so keys outside the list (extra keys included) keep
/// their case. [`ALL_FIELDS`] widens the policy to every top-level string value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizationPolicy {
    lowercase: Vec<String>,
}

impl NormalizationPolicy {
    pub fn lowercase<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lowercase: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Lowercases listed string fields of an object body in place. Other values are untouched.
    pub fn apply(&self, body: &mut Value) {
        let Value::Object(fields) = body else {
            return;
        };
        if self.lowercase.iter().any(|field| field == ALL_FIELDS) {
            for value in fields.values_mut() {
                lowercase_string(value);
            }
            return;
        }
        for field in &self.lowercase {
            if let Some(value) = fields.get_mut(field) {
                lowercase_string(value);
            }
        }
    }
}

fn lowercase_string(value: &mut Value) {
    if let Value::String(s) = value {
        *s = s.to_lowercase();
    }
}

/// A JSON body after normalization.
///
/// A request without a JSON content type (or with an empty body) yields an empty object.
/// Malformed JSON, or a top-level value that is neither object nor array, is rejected with 400.
#[derive(Debug)]
pub struct NormalizedJson(pub Value);

impl FromRequest<AppState> for NormalizedJson {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(Self(Value::Object(Map::new())));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        if bytes.is_empty() {
            return Ok(Self(Value::Object(Map::new())));
        }

        let mut body: Value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        if !(body.is_object() || body.is_array()) {
            return Err(ApiError::BadRequest(
                "Request body must be a JSON object or array".to_string(),
            ));
        }

        state.normalization.apply(&mut body);
        Ok(Self(body))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    #[test]
    fn test_only_listed_string_fields_are_lowercased() {
        let policy = NormalizationPolicy::lowercase(["name", "supplier", "quantity"]);
        let mut body = json!({
            "name": "WiDGet",
            "supplier": "ACME",
            "category": "Tools",
            "quantity": 5,
            "notes": "KEEP"
        });

        policy.apply(&mut body);

        assert_eq!(
            body,
            json!({
                "name": "widget",
                "supplier": "acme",
                "category": "Tools",
                "quantity": 5,
                "notes": "KEEP"
            })
        );
    }

    #[test]
    fn test_wildcard_lowercases_every_top_level_string() {
        let policy = NormalizationPolicy::lowercase([ALL_FIELDS]);
        let mut body = json!({
            "name": "WiDGet",
            "color": "Red",
            "quantity": 5,
            "tags": ["KEEP"]
        });

        policy.apply(&mut body);

        assert_eq!(
            body,
            json!({"name": "widget", "color": "red", "quantity": 5, "tags": ["KEEP"]})
        );
    }

    #[test]
    fn test_arrays_are_left_alone() {
        let policy = NormalizationPolicy::lowercase(["name"]);
        let mut body = json!([{"name": "UPPER"}]);
        policy.apply(&mut body);
        assert_eq!(body, json!([{"name": "UPPER"}]));
    }

    #[test]
    fn test_json_content_types() {
        let mut headers = HeaderMap::new();
        assert!(!is_json(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"));
        assert!(is_json(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/merge-patch+json"));
        assert!(is_json(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!is_json(&headers));
    }
}
