use serde::{Deserialize, Serialize};

/// One ranked row of the score leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub total_score: i64,
}
