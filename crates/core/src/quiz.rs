use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::model::{Question, QuizId, QuizPayload};
use crate::text::answers_match;

/// Shown instead of an empty question text.
pub const QUESTION_PLACEHOLDER: &str = "(question unavailable)";

/// Shown in the review when the learner never picked an option.
pub const BLANK_ANSWER: &str = "(blank)";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizStartError {
    #[error("the quiz has no questions")]
    Empty,
    #[error("the quiz response could not be read")]
    Malformed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz already finished")]
    Finished,
    #[error("option {option} does not exist on question {question}")]
    OptionOutOfRange { question: usize, option: usize },
}

/// Learner actions the quiz view can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    /// Pick the option at this position on the current question.
    Select(usize),
    Advance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Finished,
}

/// Render model for the quiz view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizView {
    Question(QuestionView),
    Finished(QuizReport),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<OptionView>,
    pub can_advance: bool,
}

impl QuestionView {
    /// 1-based progress indicator.
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.index + 1, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    /// The learner picked this option and it was wrong.
    IncorrectChosen,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOption {
    pub text: String,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItem {
    pub index: usize,
    pub question: String,
    pub options: Vec<ReviewOption>,
    pub learner_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl ReviewItem {
    #[must_use]
    pub fn learner_answer_label(&self) -> &str {
        self.learner_answer.as_deref().unwrap_or(BLANK_ANSWER)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizReport {
    pub correct: usize,
    pub total: usize,
    pub score_percent: u32,
    pub items: Vec<ReviewItem>,
}

impl QuizReport {
    /// e.g. `75% (3/4)`.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}% ({}/{})", self.score_percent, self.correct, self.total)
    }
}

/// Percentage rounded half up; zero when there is nothing to score.
#[must_use]
pub fn score_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (correct.saturating_mul(200) + total) / total.saturating_mul(2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Client-held state of one quiz attempt.
///
/// `current` stays within `0..=questions.len()` and only equals the length once
/// the quiz is finished. Answers are keyed by question index.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    quiz_id: Option<QuizId>,
    current: usize,
    answers: BTreeMap<usize, String>,
    selected: Option<usize>,
}

impl QuizSession {
    /// Start a session from a freshly fetched question set.
    ///
    /// # Errors
    ///
    /// Returns `QuizStartError::Empty` if there are no questions.
    pub fn new(questions: Vec<Question>, quiz_id: Option<QuizId>) -> Result<Self, QuizStartError> {
        if questions.is_empty() {
            return Err(QuizStartError::Empty);
        }
        let questions = questions
            .into_iter()
            .enumerate()
            .map(|(index, q)| {
                Question::new(
                    index,
                    q.text(),
                    q.options().to_vec(),
                    q.answer_descriptor(),
                )
            })
            .collect();

        Ok(Self {
            questions,
            quiz_id,
            current: 0,
            answers: BTreeMap::new(),
            selected: None,
        })
    }

    /// Start a session from a normalised payload.
    ///
    /// # Errors
    ///
    /// Returns `QuizStartError::Empty` or `QuizStartError::Malformed` when the payload
    /// carries no usable questions.
    pub fn start(payload: QuizPayload) -> Result<Self, QuizStartError> {
        match payload {
            QuizPayload::Questions { questions, quiz_id } => Self::new(questions, quiz_id),
            QuizPayload::Empty => Err(QuizStartError::Empty),
            QuizPayload::Malformed => Err(QuizStartError::Malformed),
        }
    }

    #[must_use]
    pub fn quiz_id(&self) -> Option<&QuizId> {
        self.quiz_id.as_ref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.current >= self.questions.len() {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase() == QuizPhase::Finished
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    /// Consume an intent and return the next render model.
    ///
    /// Errors leave the session untouched.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` for any intent after the last question, and
    /// `QuizError::OptionOutOfRange` when selecting an option that does not exist.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<QuizView, QuizError> {
        match intent {
            QuizIntent::Select(option) => self.select(option)?,
            QuizIntent::Advance => self.advance()?,
        }
        Ok(self.view())
    }

    fn select(&mut self, option: usize) -> Result<(), QuizError> {
        let question = self.current_question().ok_or(QuizError::Finished)?;
        let text = question
            .options()
            .get(option)
            .cloned()
            .ok_or(QuizError::OptionOutOfRange {
                question: question.index(),
                option,
            })?;
        let index = question.index();

        self.selected = Some(option);
        self.answers.insert(index, text);
        Ok(())
    }

    fn advance(&mut self) -> Result<(), QuizError> {
        let question = self.current_question().ok_or(QuizError::Finished)?;
        let index = question.index();
        let picked = self
            .selected
            .and_then(|option| question.options().get(option))
            .cloned();

        if let Some(text) = picked {
            self.answers.insert(index, text);
        }
        self.selected = None;
        self.current += 1;
        Ok(())
    }

    /// Render model for the current state.
    #[must_use]
    pub fn view(&self) -> QuizView {
        match self.current_question() {
            Some(question) => QuizView::Question(self.question_view(question)),
            None => QuizView::Finished(self.report()),
        }
    }

    fn question_view(&self, question: &Question) -> QuestionView {
        let text = if question.text().is_empty() {
            QUESTION_PLACEHOLDER.to_string()
        } else {
            question.text().to_string()
        };
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| OptionView {
                index,
                text: option.clone(),
                selected: self.selected == Some(index),
            })
            .collect();

        QuestionView {
            index: self.current,
            total: self.total(),
            text,
            options,
            can_advance: self.answers.contains_key(&question.index()),
        }
    }

    /// Score every question in order against the recorded answers.
    #[must_use]
    pub fn report(&self) -> QuizReport {
        let items: Vec<ReviewItem> = self
            .questions
            .iter()
            .map(|question| self.review_item(question))
            .collect();
        let correct = items.iter().filter(|item| item.is_correct).count();
        let total = items.len();

        QuizReport {
            correct,
            total,
            score_percent: score_percent(correct, total),
            items,
        }
    }

    fn review_item(&self, question: &Question) -> ReviewItem {
        let learner_answer = self.answer_for(question.index()).map(str::to_string);
        let correct_answer = question.correct_answer();
        let is_correct = learner_answer
            .as_deref()
            .is_some_and(|answer| answers_match(answer, &correct_answer));

        let options = question
            .options()
            .iter()
            .map(|option| {
                let mark = if answers_match(option, &correct_answer) {
                    OptionMark::Correct
                } else if !is_correct
                    && learner_answer
                        .as_deref()
                        .is_some_and(|answer| answers_match(option, answer))
                {
                    OptionMark::IncorrectChosen
                } else {
                    OptionMark::Neutral
                };
                ReviewOption {
                    text: option.clone(),
                    mark,
                }
            })
            .collect();

        ReviewItem {
            index: question.index(),
            question: question.text().to_string(),
            options,
            learner_answer,
            correct_answer,
            is_correct,
        }
    }

    /// Answers keyed by stringified question index, as the submit endpoint expects.
    #[must_use]
    pub fn submission_answers(&self) -> BTreeMap<String, String> {
        self.answers
            .iter()
            .map(|(index, answer)| (index.to_string(), answer.clone()))
            .collect()
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("quiz_id", &self.quiz_id)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
