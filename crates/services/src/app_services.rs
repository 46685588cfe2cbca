use std::sync::Arc;

use edumate_core::ApiBase;
use storage::repository::Storage;
use tracing::info;

use crate::api::{ApiClient, HttpTransport, ReqwestTransport};
use crate::auth_service::AuthService;
use crate::chat_service::ChatService;
use crate::config::ClientConfig;
use crate::error::AppServicesError;
use crate::leaderboard_service::LeaderboardService;
use crate::quiz_service::QuizService;
use crate::session_store::SessionStore;

/// Assembles the app-facing services over one API client and one session store.
#[derive(Clone)]
pub struct AppServices {
    session: SessionStore,
    auth: Arc<AuthService>,
    quiz: Arc<QuizService>,
    chat: Arc<ChatService>,
    leaderboard: Arc<LeaderboardService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and a real HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the API base is invalid or storage cannot be
    /// initialized.
    pub async fn connect(config: &ClientConfig) -> Result<Self, AppServicesError> {
        let base = config.api_base()?;
        let storage = Storage::sqlite(&config.db_url).await?;
        info!(api_base = %base, db = %config.db_url, "services ready");
        Ok(Self::new(&storage, base, Arc::new(ReqwestTransport::new())))
    }

    #[must_use]
    pub fn new(storage: &Storage, base: ApiBase, transport: Arc<dyn HttpTransport>) -> Self {
        let api = Arc::new(ApiClient::new(base, transport));
        let session = SessionStore::new(Arc::clone(&storage.local));

        Self {
            auth: Arc::new(AuthService::new(Arc::clone(&api), session.clone())),
            quiz: Arc::new(QuizService::new(Arc::clone(&api), session.clone())),
            chat: Arc::new(ChatService::new(Arc::clone(&api), session.clone())),
            leaderboard: Arc::new(LeaderboardService::new(api)),
            session,
        }
    }

    #[must_use]
    pub fn session(&self) -> SessionStore {
        self.session.clone()
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn chat(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }

    #[must_use]
    pub fn leaderboard(&self) -> Arc<LeaderboardService> {
        Arc::clone(&self.leaderboard)
    }
}
