mod auth;
mod chat;
mod home;
mod leaderboard;
mod quiz;
mod splash;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth::{LoginView, RegisterView};
pub use chat::ChatView;
pub use home::HomeView;
pub use leaderboard::LeaderboardView;
pub use quiz::QuizView;
pub use splash::SplashView;
pub use state::{ViewError, ViewState, view_state_from_resource};
