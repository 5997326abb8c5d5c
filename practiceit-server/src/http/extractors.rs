//! Custom Axum extractors applying the configured
//! [`InputPolicy`](super::policy::InputPolicy)

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use super::server::AppState;
use crate::models::{parse_entity_id, EntityId};

/// Entity id from the single `{id}` path segment.
///
/// Lenient: a non-numeric segment becomes id 0.
pub struct EntityIdPath(pub EntityId);

impl FromRequestParts<Arc<AppState>> for EntityIdPath {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadInput {
                message: e.body_text(),
            })?;

        match parse_entity_id(&raw) {
            Ok(id) => Ok(Self(id)),
            Err(_) if state.policy.is_lenient() => {
                tracing::warn!(raw = %raw, "non-numeric id, using 0");
                Ok(Self(0))
            }
            Err(e) => Err(ApiError::BadInput {
                message: format!("invalid id '{}': {}", raw, e),
            }),
        }
    }
}

/// JSON request body, read regardless of `Content-Type`.
///
/// Entity fields that are `null` or of the wrong type decode to zero
/// values on their own (see [`crate::models`]). On top of that:
///
/// - Lenient: a body that is not JSON, or not the expected shape, becomes
///   `T::default()`; reset fields are logged.
/// - Strict: both of those, and any non-null field that was reset, are
///   rejected.
pub struct Payload<T>(pub T);

impl<T> FromRequest<Arc<AppState>> for Payload<T>
where
    T: DeserializeOwned + Serialize + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadInput {
                message: e.body_text(),
            })?;
        let lenient = state.policy.is_lenient();

        let decoded = serde_json::from_slice::<Value>(&bytes).and_then(|input| {
            let value = T::deserialize(&input)?;
            Ok((input, value))
        });
        let (input, value) = match decoded {
            Ok(decoded) => decoded,
            Err(e) if lenient => {
                tracing::warn!(error = %e, "malformed JSON body, using zero values");
                return Ok(Self(T::default()));
            }
            Err(e) => {
                return Err(ApiError::BadInput {
                    message: format!("invalid JSON body: {}", e),
                })
            }
        };

        let output = serde_json::to_value(&value).unwrap_or(Value::Null);
        match reset_field(&input, &output) {
            None => Ok(Self(value)),
            Some(field) if lenient => {
                tracing::warn!(field = %field, "field has wrong type, using zero value");
                Ok(Self(value))
            }
            Some(field) => Err(ApiError::BadInput {
                message: format!("invalid JSON body: wrong type for '{}'", field),
            }),
        }
    }
}

/// Path of the first non-null input value that did not survive
/// decoding, e.g. `items[1].product_id`.
fn reset_field(input: &Value, output: &Value) -> Option<String> {
    let path = reset_path(input, output)?;
    let path = path.trim_start_matches('.');
    Some(if path.is_empty() { "body".to_owned() } else { path.to_owned() })
}

// Keys missing from `output` are unknown to the entity and ignored.
fn reset_path(input: &Value, output: &Value) -> Option<String> {
    match (input, output) {
        (Value::Object(fields), Value::Object(decoded)) => {
            fields.iter().find_map(|(key, value)| {
                let kept = decoded.get(key)?;
                if value.is_null() {
                    return None;
                }
                reset_path(value, kept).map(|rest| format!(".{}{}", key, rest))
            })
        }
        (Value::Array(elements), Value::Array(decoded)) if elements.len() == decoded.len() => {
            elements
                .iter()
                .zip(decoded)
                .enumerate()
                .find_map(|(i, (value, kept))| {
                    reset_path(value, kept).map(|rest| format!("[{}]{}", i, rest))
                })
        }
        _ if input == output => None,
        _ => Some(String::new()),
    }
}
