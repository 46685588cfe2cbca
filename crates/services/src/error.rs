//! Shared error types for the services crate.

use thiserror::Error;

use edumate_core::ApiBaseError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Shown whenever the backend could not be reached at all.
pub const UNREACHABLE_MESSAGE: &str = "Could not reach the server.";

/// Errors raised before any HTTP status was received.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportError {
    #[error("could not reach server: {0}")]
    Unreachable(String),
    #[error("could not read response body: {0}")]
    Body(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("username and password are required")]
    Validation,
    #[error("rejected by server: {message}")]
    Rejected { message: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation => "Username and password are required.".to_string(),
            Self::Rejected { message } => message.clone(),
            Self::Transport(_) => UNREACHABLE_MESSAGE.to_string(),
            Self::Storage(_) => "Could not save your session.".to_string(),
        }
    }
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("no session identity")]
    NotLoggedIn,
    #[error("rejected by server: {message}")]
    Rejected { message: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl QuizServiceError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotLoggedIn => "Please log in first.".to_string(),
            Self::Rejected { message } => format!("Could not start the quiz: {message}"),
            Self::Transport(_) => format!("Could not start the quiz: {UNREACHABLE_MESSAGE}"),
            Self::Storage(_) => "Could not read your session.".to_string(),
        }
    }
}

/// Errors emitted by `ChatService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatError {
    #[error("rejected by server: {message}")]
    Rejected { message: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ChatError {
    /// Detail appended to the failure prefix in the transcript.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Rejected { message } => message.clone(),
            Self::Transport(_) => UNREACHABLE_MESSAGE.to_string(),
            Self::Storage(err) => err.to_string(),
        }
    }
}

/// Errors emitted by `LeaderboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LeaderboardError {
    #[error("leaderboard request failed with status {0}")]
    HttpStatus(u16),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl LeaderboardError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::HttpStatus(_) => "Could not load the leaderboard.".to_string(),
            Self::Transport(_) => UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    ApiBase(#[from] ApiBaseError),
}
