use std::sync::Arc;

use edumate_core::model::{ChatRole, ChatTranscript, ChatTurn, envelope, identity_or_anonymous};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::error::ChatError;
use crate::session_store::SessionStore;

const SEND_FAILED: &str = "Failed to send chat.";

#[derive(Serialize)]
struct ChatBody<'a> {
    username: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct HistoryBody {
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

#[derive(Deserialize)]
struct HistoryEntry {
    #[serde(default)]
    role: String,
    #[serde(default)]
    message: String,
}

/// Relays learner messages to the tutor backend.
#[derive(Clone)]
pub struct ChatService {
    api: Arc<ApiClient>,
    session: SessionStore,
}

impl ChatService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Send an already-trimmed message and return the bot reply.
    ///
    /// Anonymous when nobody is logged in.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Rejected` for a non-2xx status and `ChatError::Transport`
    /// when unreachable.
    pub async fn send(&self, message: &str) -> Result<String, ChatError> {
        let identity = self.session.get().await?;
        let response = self
            .api
            .post(
                &["api", "chat"],
                &ChatBody {
                    username: identity_or_anonymous(identity.as_ref()),
                    message,
                },
            )
            .await?;

        let body = response.json_or_empty();
        if !response.is_success() {
            warn!(status = response.status, "chat rejected");
            return Err(ChatError::Rejected {
                message: envelope::server_error(&body).unwrap_or_else(|| SEND_FAILED.to_string()),
            });
        }

        Ok(envelope::first_string(&body, &["reply"]).unwrap_or_default())
    }

    /// Load earlier turns for the logged-in user. Anonymous users start empty.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Rejected` for a non-2xx status and `ChatError::Transport`
    /// when unreachable.
    pub async fn history(&self) -> Result<ChatTranscript, ChatError> {
        let Some(identity) = self.session.get().await? else {
            return Ok(ChatTranscript::new());
        };

        let response = self
            .api
            .get(&["api", "chat", "history", identity.as_str()])
            .await?;
        if !response.is_success() {
            return Err(ChatError::Rejected {
                message: format!("status {}", response.status),
            });
        }

        let parsed: HistoryBody = serde_json::from_value(response.json_or_empty())
            .unwrap_or(HistoryBody {
                history: Vec::new(),
            });
        debug!(turns = parsed.history.len(), "chat history loaded");

        Ok(ChatTranscript::from_turns(
            parsed
                .history
                .into_iter()
                .map(|entry| ChatTurn::new(ChatRole::from_label(&entry.role), entry.message))
                .collect(),
        ))
    }
}
