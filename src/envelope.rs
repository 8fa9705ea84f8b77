//! Decoding helpers for the Dayforce JSON response envelope.
//!
//! Successful responses wrap their payload in a conventional envelope:
//! `{ "Data": <payload>, ... }`. Failure responses may carry a
//! `processResults` array with diagnostic detail. Both the request
//! executor and the error type need to decode bodies, so the decode step
//! lives here as stateless free functions rather than behavior shared
//! through a trait.

use serde_json::Value;

use crate::error::{Error, Result};

/// Decodes a raw response body into a JSON value.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the body is not valid JSON. This
/// propagates to the caller unchanged: an unparseable body on the success
/// path indicates a contract breach by the remote system.
pub(crate) fn decode(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| Error::decode("Response body is not valid JSON", e))
}

/// Extracts the `Data` payload from a decoded envelope.
///
/// Returns `None` when `Data` is absent or null; the remote API signals
/// "no records" with HTTP 200 and an empty envelope, so payload absence is
/// checked explicitly rather than inferred from the status code.
pub(crate) fn data(envelope: Value) -> Option<Value> {
    match envelope {
        Value::Object(mut map) => match map.remove("Data") {
            Some(Value::Null) | None => None,
            Some(payload) => Some(payload),
        },
        _ => None,
    }
}

/// Best-effort extraction of the `processResults` diagnostic array.
///
/// Unlike [`decode`], a parse failure here is swallowed: this runs while
/// building an error, and a secondary decode failure must never mask the
/// primary one. Non-JSON bodies and envelopes without the field both
/// yield an empty vec.
pub(crate) fn process_results(body: &str) -> Vec<Value> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|mut envelope| {
            envelope
                .as_object_mut()
                .and_then(|map| map.remove("processResults"))
        })
        .and_then(|results| match results {
            Value::Array(items) => Some(items),
            _ => None,
        })
        .unwrap_or_default()
}
