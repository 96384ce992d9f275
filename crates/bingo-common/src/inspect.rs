//! Render arbitrary values as JSON for eyeballing in a terminal.
//!
//! Anything that implements `Serialize` can be inspected. Values that fail
//! to serialize (maps with non-string keys, for instance) render as a small
//! JSON object carrying the error instead of aborting the caller.

use serde::Serialize;
use serde_json::Value;

/// Convert a value into a `serde_json::Value`.
pub fn inspect_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("failed to serialize value: {e}") })
    })
}

/// Pretty-print a value as indented JSON.
pub fn inspect<T: Serialize + ?Sized>(value: &T) -> String {
    let value = inspect_value(value);
    serde_json::to_string_pretty(&value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to format value: {e}\"}}"))
}
