//! Request parameter handling.
//!
//! The modify workflow overlays caller-supplied parameters on top of
//! defaults taken from the located record. The merge is pure and does no
//! I/O so it can be tested without a server.

use crate::error::{DdnsError, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Form parameters for an API call, ordered by key.
pub type Params = BTreeMap<String, String>;

/// Fill `params` from an ordered list of (key, fallback) pairs.
///
/// A fallback is applied only when the caller did not already supply that
/// key; caller-supplied values are never overwritten.
pub fn fill_defaults(params: &mut Params, defaults: &[(&str, String)]) {
    for (key, fallback) in defaults {
        params
            .entry((*key).to_string())
            .or_insert_with(|| fallback.clone());
    }
}

/// Extract a field from a JSON mapping as form-parameter text.
///
/// DNSPod mixes encodings across fields (`"id": "10"` but `"mx": 0`), so
/// strings are taken verbatim and numbers are rendered in decimal. An
/// absent field is a [`DdnsError::MissingField`].
pub fn field_text(value: &Value, key: &str) -> Result<String> {
    let field = value.get(key).ok_or_else(|| DdnsError::MissingField {
        field: key.to_string(),
    })?;

    Ok(match field {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}
