//! Portal key derivation
//!
//! JSON object keys are strings, so a reference `name` has to be turned into
//! one before it can index the portal map.

use serde_json::Value;

/// Map key for a reference `name`.
///
/// Strings are used verbatim. Numbers, booleans and `null` are keyed by their
/// compact JSON text (`1`, `true`, `null`). Arrays and objects have no key form
/// and yield `None`.
pub fn portal_key(name: &Value) -> Option<String> {
    match name {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) | Value::Null => Some(name.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
