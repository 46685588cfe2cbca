#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod chat_service;
pub mod config;
pub mod error;
pub mod leaderboard_service;
pub mod quiz_service;
pub mod session_store;

pub use app_services::AppServices;
pub use auth_service::{AuthOutcome, AuthRedirect, AuthService};
pub use chat_service::ChatService;
pub use config::ClientConfig;
pub use error::{
    AppServicesError, AuthError, ChatError, LeaderboardError, QuizServiceError, TransportError,
};
pub use leaderboard_service::LeaderboardService;
pub use quiz_service::{QuizRequest, QuizService, SubmitReceipt};
pub use session_store::SessionStore;
