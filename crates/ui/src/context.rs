use std::sync::Arc;

use services::{
    AppServices, AuthService, ChatService, LeaderboardService, QuizService, SessionStore,
};

pub trait UiApp: Send + Sync {
    fn session(&self) -> SessionStore;
    fn auth(&self) -> Arc<AuthService>;
    fn quiz(&self) -> Arc<QuizService>;
    fn chat(&self) -> Arc<ChatService>;
    fn leaderboard(&self) -> Arc<LeaderboardService>;
}

impl UiApp for AppServices {
    fn session(&self) -> SessionStore {
        AppServices::session(self)
    }

    fn auth(&self) -> Arc<AuthService> {
        AppServices::auth(self)
    }

    fn quiz(&self) -> Arc<QuizService> {
        AppServices::quiz(self)
    }

    fn chat(&self) -> Arc<ChatService> {
        AppServices::chat(self)
    }

    fn leaderboard(&self) -> Arc<LeaderboardService> {
        AppServices::leaderboard(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    session: SessionStore,
    auth: Arc<AuthService>,
    quiz: Arc<QuizService>,
    chat: Arc<ChatService>,
    leaderboard: Arc<LeaderboardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            auth: app.auth(),
            quiz: app.quiz(),
            chat: app.chat(),
            leaderboard: app.leaderboard(),
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

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
