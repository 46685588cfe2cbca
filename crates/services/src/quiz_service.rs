use std::collections::BTreeMap;
use std::sync::Arc;

use edumate_core::QuizSession;
use edumate_core::model::{QuizPayload, envelope};
use edumate_core::text::parse_count_or;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::error::QuizServiceError;
use crate::session_store::SessionStore;

pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_TOTAL: u32 = 10;

const NO_QUESTIONS: &str = "No questions available.";
const RAW_LOG_LIMIT: usize = 500;

/// Parameters read from the quiz setup form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRequest {
    pub category: String,
    pub total: u32,
}

impl QuizRequest {
    /// Apply the form defaults: blank category and unparsable or zero counts.
    #[must_use]
    pub fn from_form(category: &str, total: &str) -> Self {
        let category = category.trim();
        Self {
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            total: parse_count_or(total, DEFAULT_TOTAL),
        }
    }
}

impl Default for QuizRequest {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            total: DEFAULT_TOTAL,
        }
    }
}

#[derive(Serialize)]
struct StartBody<'a> {
    username: &'a str,
    category: &'a str,
    total: u32,
}

#[derive(Serialize)]
struct SubmitBody<'a> {
    username: &'a str,
    answers: BTreeMap<String, String>,
}

/// Server-side grading of a submitted quiz.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default)]
    pub correct: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub score_percent: u32,
}

#[derive(Clone)]
pub struct QuizService {
    api: Arc<ApiClient>,
    session: SessionStore,
}

impl QuizService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Request a question set and open a session on it.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::NotLoggedIn` without a request when no identity is
    /// stored, `QuizServiceError::Rejected` when the status is not 2xx or no usable
    /// questions came back, and `QuizServiceError::Transport` when unreachable.
    pub async fn start(&self, request: &QuizRequest) -> Result<QuizSession, QuizServiceError> {
        let identity = self
            .session
            .get()
            .await?
            .ok_or(QuizServiceError::NotLoggedIn)?;

        let response = self
            .api
            .post(
                &["api", "quiz"],
                &StartBody {
                    username: identity.as_str(),
                    category: &request.category,
                    total: request.total,
                },
            )
            .await?;
        debug!(raw = %truncate(&response.body, RAW_LOG_LIMIT), "quiz response");

        let payload = QuizPayload::parse(&response.body);
        if payload == QuizPayload::Malformed {
            warn!(status = response.status, "quiz response is not JSON");
        }

        let rejected = || QuizServiceError::Rejected {
            message: envelope::server_error(&response.json_or_empty())
                .unwrap_or_else(|| NO_QUESTIONS.to_string()),
        };
        if !response.is_success() {
            return Err(rejected());
        }
        let session = QuizSession::start(payload).map_err(|_| rejected())?;

        info!(
            category = %request.category,
            questions = session.total(),
            quiz_id = ?session.quiz_id(),
            "quiz started"
        );
        Ok(session)
    }

    /// Report a finished attempt to the backend.
    ///
    /// Returns `Ok(None)` when the quiz has no server identifier or nobody is logged in.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Rejected` for a non-2xx status and
    /// `QuizServiceError::Transport` when unreachable.
    pub async fn submit(
        &self,
        session: &QuizSession,
    ) -> Result<Option<SubmitReceipt>, QuizServiceError> {
        let Some(quiz_id) = session.quiz_id() else {
            return Ok(None);
        };
        let Some(identity) = self.session.get().await? else {
            return Ok(None);
        };

        let response = self
            .api
            .post(
                &["api", "quiz", quiz_id.as_str(), "submit"],
                &SubmitBody {
                    username: identity.as_str(),
                    answers: session.submission_answers(),
                },
            )
            .await?;

        if !response.is_success() {
            return Err(QuizServiceError::Rejected {
                message: envelope::server_error(&response.json_or_empty())
                    .unwrap_or_else(|| format!("status {}", response.status)),
            });
        }

        let receipt: SubmitReceipt =
            serde_json::from_value(response.json_or_empty()).unwrap_or_default();
        info!(%quiz_id, score = receipt.score_percent, "quiz submitted");
        Ok(Some(receipt))
    }
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults() {
        assert_eq!(QuizRequest::from_form("", ""), QuizRequest::default());
        assert_eq!(
            QuizRequest::from_form(" history ", "abc"),
            QuizRequest {
                category: "history".to_string(),
                total: DEFAULT_TOTAL,
            }
        );
        assert_eq!(QuizRequest::from_form("math", "5").total, 5);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 10), "hi");
    }
}
