//! Helpers for the loosely typed JSON envelopes the backend returns.

use serde_json::{Map, Value};

/// Parse a response body, substituting an empty object for anything malformed.
#[must_use]
pub fn parse_lenient(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Truthiness as the backend's clients have always interpreted it.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether the envelope carries a truthy `success` flag.
#[must_use]
pub fn success_flag(value: &Value) -> bool {
    value.get("success").is_some_and(is_truthy)
}

/// First non-empty string found under `keys`, in order.
#[must_use]
pub fn first_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .filter_map(Value::as_str)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Server-provided message, preferring `msg` over `error`.
#[must_use]
pub fn server_message(value: &Value) -> Option<String> {
    first_string(value, &["msg", "error"])
}

/// Server-provided error, preferring `error` over `msg`.
#[must_use]
pub fn server_error(value: &Value) -> Option<String> {
    first_string(value, &["error", "msg"])
}

/// Render a scalar JSON value as display text. Containers and null yield `None`.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_body_becomes_empty_object() {
        assert_eq!(parse_lenient("<html>502</html>"), json!({}));
        assert_eq!(parse_lenient(""), json!({}));
    }

    #[test]
    fn success_requires_truthy_flag() {
        assert!(success_flag(&json!({"success": true})));
        assert!(success_flag(&json!({"success": 1})));
        assert!(!success_flag(&json!({"success": false})));
        assert!(!success_flag(&json!({"success": ""})));
        assert!(!success_flag(&json!({})));
    }

    #[test]
    fn message_prefers_msg_then_error() {
        assert_eq!(
            server_message(&json!({"msg": "", "error": "nope"})),
            Some("nope".to_string())
        );
        assert_eq!(
            server_message(&json!({"msg": "taken", "error": "nope"})),
            Some("taken".to_string())
        );
        assert_eq!(server_message(&json!({"msg": 3})), None);
    }
}
