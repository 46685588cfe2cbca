mod chat;
pub mod envelope;
mod identity;
mod ids;
mod leaderboard;
mod payload;
mod question;

pub use chat::{ChatRole, ChatTranscript, ChatTurn, SEND_FAILURE_PREFIX, prepare_message};
pub use identity::{ANONYMOUS, Username, UsernameError, identity_or_anonymous};
pub use ids::QuizId;
pub use leaderboard::LeaderboardEntry;
pub use payload::QuizPayload;
pub use question::Question;
