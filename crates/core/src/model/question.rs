use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::{first_string, scalar_text};
use crate::text::resolve_correct_answer;

/// Field names the backend has used for the question text, in priority order.
const TEXT_KEYS: [&str; 3] = ["q", "question", "text"];

/// A single multiple-choice question, tagged with its position in the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    index: usize,
    text: String,
    options: Vec<String>,
    answer: String,
}

impl Question {
    #[must_use]
    pub fn new(
        index: usize,
        text: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            index,
            text: text.into(),
            options,
            answer: answer.into(),
        }
    }

    /// Build a question from a loosely typed server entry.
    ///
    /// Entries that are not objects produce a question with no text or options so
    /// positions stay aligned with the server's list.
    #[must_use]
    pub fn from_json(index: usize, value: &Value) -> Self {
        let text = first_string(value, &TEXT_KEYS).unwrap_or_default();
        let options = value
            .get("options")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(scalar_text).collect())
            .unwrap_or_default();
        let answer = value.get("answer").and_then(scalar_text).unwrap_or_default();
        Self::new(index, text, options, answer)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display text; empty when the server sent none.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The raw correct-answer descriptor (letter, index, or literal).
    #[must_use]
    pub fn answer_descriptor(&self) -> &str {
        &self.answer
    }

    /// The descriptor resolved against the options.
    #[must_use]
    pub fn correct_answer(&self) -> String {
        resolve_correct_answer(&self.answer, &self.options)
    }
}
