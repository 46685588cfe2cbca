use std::sync::Arc;

use edumate_core::model::Username;
use storage::repository::{LocalStorageRepository, StorageError};
use tracing::warn;

/// Storage key holding the logged-in username.
pub const IDENTITY_KEY: &str = "username";

/// The single persisted session identity.
#[derive(Clone)]
pub struct SessionStore {
    repo: Arc<dyn LocalStorageRepository>,
}

impl SessionStore {
    #[must_use]
    pub fn new(repo: Arc<dyn LocalStorageRepository>) -> Self {
        Self { repo }
    }

    /// Persist `identity`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    pub async fn set(&self, identity: &Username) -> Result<(), StorageError> {
        self.repo.set_item(IDENTITY_KEY, identity.as_str()).await
    }

    /// Read the current identity. A blank stored value reads as logged out.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be read.
    pub async fn get(&self) -> Result<Option<Username>, StorageError> {
        let stored = self.repo.get_item(IDENTITY_KEY).await?;
        Ok(stored.and_then(|raw| match Username::new(raw) {
            Ok(name) => Some(name),
            Err(err) => {
                warn!(%err, "ignoring invalid stored identity");
                None
            }
        }))
    }

    /// Forget the identity (logout).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be cleared.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.repo.remove_item(IDENTITY_KEY).await
    }
}
