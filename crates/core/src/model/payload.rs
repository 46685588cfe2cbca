use serde_json::Value;

use super::QuizId;
use super::question::Question;

/// Keys the backend has used for the question list, in priority order.
const LIST_KEYS: [&str; 3] = ["questions", "quiz", "items"];

/// Normalised shape of a quiz-generation response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPayload {
    Questions {
        questions: Vec<Question>,
        quiz_id: Option<QuizId>,
    },
    /// Valid JSON without any non-empty question list.
    Empty,
    /// The body was not JSON at all.
    Malformed,
}

impl QuizPayload {
    /// Normalise a raw response body.
    ///
    /// The list may sit under `questions`, `quiz` or `items`, or be the body
    /// itself; the first non-empty array wins.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return Self::Malformed;
        };
        Self::from_value(&value)
    }

    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let list = LIST_KEYS
            .iter()
            .filter_map(|key| value.get(*key))
            .chain(std::iter::once(value))
            .filter_map(Value::as_array)
            .find(|items| !items.is_empty());

        let Some(items) = list else {
            return Self::Empty;
        };

        let questions = items
            .iter()
            .enumerate()
            .map(|(index, item)| Question::from_json(index, item))
            .collect();
        let quiz_id = ["quiz_id", "id"]
            .iter()
            .filter_map(|key| value.get(*key))
            .find_map(QuizId::from_json);

        Self::Questions { questions, quiz_id }
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        match self {
            Self::Questions { questions, .. } => questions.len(),
            Self::Empty | Self::Malformed => 0,
        }
    }
}
