use std::sync::Arc;

use edumate_core::model::LeaderboardEntry;
use serde::Deserialize;

use crate::api::ApiClient;
use crate::error::LeaderboardError;

#[derive(Deserialize)]
struct LeadersBody {
    #[serde(default)]
    leaders: Vec<LeaderRow>,
}

#[derive(Deserialize)]
struct LeaderRow {
    #[serde(default)]
    username: String,
    #[serde(default)]
    total_score: Option<f64>,
}

#[derive(Clone)]
pub struct LeaderboardService {
    api: Arc<ApiClient>,
}

impl LeaderboardService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Fetch the top scorers, ranked from 1 in server order.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::HttpStatus` for a non-2xx status and
    /// `LeaderboardError::Transport` when unreachable.
    pub async fn top(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let response = self.api.get(&["api", "quiz", "leaderboard"]).await?;
        if !response.is_success() {
            return Err(LeaderboardError::HttpStatus(response.status));
        }

        let body: LeadersBody = serde_json::from_value(response.json_or_empty())
            .unwrap_or(LeadersBody {
                leaders: Vec::new(),
            });

        #[allow(clippy::cast_possible_truncation)]
        let entries = body
            .leaders
            .into_iter()
            .enumerate()
            .map(|(position, row)| LeaderboardEntry {
                rank: position + 1,
                username: row.username,
                total_score: row.total_score.unwrap_or_default().round() as i64,
            })
            .collect();
        Ok(entries)
    }
}
