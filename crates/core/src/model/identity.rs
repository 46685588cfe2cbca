use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel identity sent to the chat backend when nobody is logged in.
pub const ANONYMOUS: &str = "anonymous";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UsernameError {
    #[error("username cannot be empty")]
    Empty,
}

/// The persisted session identity (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a validated username.
    ///
    /// # Errors
    ///
    /// Returns `UsernameError::Empty` if the name is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, UsernameError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity string to send on behalf of an optional session.
#[must_use]
pub fn identity_or_anonymous(identity: Option<&Username>) -> &str {
    identity.map_or(ANONYMOUS, Username::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejects_blank() {
        assert_eq!(Username::new("  ana ").unwrap().as_str(), "ana");
        assert_eq!(Username::new("   "), Err(UsernameError::Empty));
    }

    #[test]
    fn anonymous_fallback() {
        let ana = Username::new("ana").unwrap();
        assert_eq!(identity_or_anonymous(Some(&ana)), "ana");
        assert_eq!(identity_or_anonymous(None), ANONYMOUS);
    }
}
