// src/application/audit/sanitize.rs
//! Bounded-depth/breadth copying of arbitrary payloads before they are
//! persisted as audit details. Strips sensitive keys; never fails.

use serde_json::{Map, Value};

pub const MAX_DEPTH: usize = 3;
pub const MAX_ARRAY_ELEMENTS: usize = 10;
pub const MAX_OBJECT_KEYS: usize = 20;
pub const MAX_DETAILS_BYTES: usize = 50_000;
pub const CIRCULAR_MARKER: &str = "[Circular Reference]";

const SENSITIVE_KEYS: [&str; 2] = ["password", "token"];

/// Depth-bounded copy: at most [`MAX_DEPTH`] levels, arrays truncated to
/// [`MAX_ARRAY_ELEMENTS`], objects to [`MAX_OBJECT_KEYS`] keys per level.
/// Keys literally named `password` or `token` are dropped at every level.
/// Containers beyond the depth bound collapse to [`CIRCULAR_MARKER`].
pub fn sanitize(value: &Value) -> Value {
    sanitize_at(value, 0)
}

fn sanitize_at(value: &Value, depth: usize) -> Value {
    match value {
        Value::Array(items) => {
            if depth >= MAX_DEPTH {
                return Value::String(CIRCULAR_MARKER.into());
            }
            Value::Array(
                items
                    .iter()
                    .take(MAX_ARRAY_ELEMENTS)
                    .map(|item| sanitize_at(item, depth + 1))
                    .collect(),
            )
        }
        Value::Object(map) => {
            if depth >= MAX_DEPTH {
                return Value::String(CIRCULAR_MARKER.into());
            }
            let mut sanitized = Map::new();
            for (key, item) in map
                .iter()
                .filter(|(key, _)| !SENSITIVE_KEYS.contains(&key.as_str()))
                .take(MAX_OBJECT_KEYS)
            {
                sanitized.insert(key.clone(), sanitize_at(item, depth + 1));
            }
            Value::Object(sanitized)
        }
        scalar => scalar.clone(),
    }
}

/// Coerce a loosely-typed id (number, numeric string, anything) to an
/// integer, or `None` when absent or unparseable. Never fails.
pub fn coerce_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) if !s.is_empty() => s.trim().parse().ok(),
        _ => None,
    }
}

/// Serialized size of a details payload; a payload that cannot be serialized
/// counts as oversized so the caller falls back to the summary.
pub fn details_size(details: &Value) -> usize {
    serde_json::to_string(details)
        .map(|s| s.len())
        .unwrap_or(usize::MAX)
}
