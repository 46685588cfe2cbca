use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque quiz identifier handed out by the backend.
///
/// The server may send it as a number or a string. Numbers keep their JSON
/// rendering and strings lose surrounding whitespace.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizId(String);

impl QuizId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Read an identifier from a loosely typed JSON value.
    ///
    /// Only non-empty strings and non-zero numbers count as present.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(raw) if !raw.trim().is_empty() => Some(Self(raw.trim().to_string())),
            Value::Number(number) if number.as_f64().is_some_and(|n| n != 0.0) => {
                Some(Self(number.to_string()))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuizId({})", self.0)
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
