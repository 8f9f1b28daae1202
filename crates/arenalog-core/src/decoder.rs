//! Turn raw block fragments into a parsed JSON value.

use serde_json::Value;

use crate::error::{Error, Result};

/// Parse the fragments of a scanned block as one JSON value.
///
/// Fragments are joined in order. An empty fragment list (keyword never
/// matched) fails with [`Error::LogParsing`] like any other malformed block;
/// absence of a block is never silently turned into null.
pub fn decode(fragments: &[String]) -> Result<Value> {
    if fragments.is_empty() {
        return Err(Error::log_parsing("no block found for keyword"));
    }
    let text = fragments.join("\n");
    serde_json::from_str(&text).map_err(|e| Error::log_parsing(e.to_string()))
}

/// Unwrap the optional `payload` envelope some events carry.
///
/// Returns `value["payload"]` when present on an object, the value itself
/// otherwise. Idempotent once no nested envelope remains.
pub fn unwrap_payload(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        if let Some(inner) = map.remove("payload") {
            return inner;
        }
    }
    value
}
