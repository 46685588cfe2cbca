use edumate_core::text::escape_html;
use edumate_core::{
    OptionMark, QuestionView, QuizIntent, QuizReport, QuizSession, QuizView as QuizRender,
    ReviewItem,
};
use services::{QuizRequest, QuizService};
use tracing::error;

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue(QuestionView),
    Finished(ReviewVm),
}

/// Finished-quiz render model. Every row is an escaped HTML fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewVm {
    pub score_label: String,
    pub rows: Vec<String>,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn outcome(&self) -> QuizOutcome {
        outcome_of(self.session.view())
    }

    /// Feed one learner intent into the session.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the session refuses the intent; the session
    /// keeps its previous state.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizOutcome, ViewError> {
        match self.session.apply(intent) {
            Ok(view) => Ok(outcome_of(view)),
            Err(err) => {
                error!(%err, ?intent, "quiz intent rejected");
                Err(ViewError::Unknown)
            }
        }
    }
}

fn outcome_of(view: QuizRender) -> QuizOutcome {
    match view {
        QuizRender::Question(question) => QuizOutcome::Continue(question),
        QuizRender::Finished(report) => QuizOutcome::Finished(map_review(&report)),
    }
}

/// # Errors
///
/// Returns `ViewError::Message` with the user-facing reason when the quiz cannot start.
pub async fn start_quiz(quiz: &QuizService, request: &QuizRequest) -> Result<QuizVm, ViewError> {
    quiz.start(request)
        .await
        .map(QuizVm::new)
        .map_err(|err| ViewError::Message(err.user_message()))
}

#[must_use]
pub fn map_review(report: &QuizReport) -> ReviewVm {
    ReviewVm {
        score_label: format!("Your score: {}", report.score_label()),
        rows: report.items.iter().map(render_review_item).collect(),
    }
}

#[must_use]
pub fn render_review_item(item: &ReviewItem) -> String {
    let options: String = item
        .options
        .iter()
        .map(|option| {
            let class = match option.mark {
                OptionMark::Correct => "opt correct-opt",
                OptionMark::IncorrectChosen => "opt wrong-opt",
                OptionMark::Neutral => "opt",
            };
            format!(r#"<div class="{class}">{}</div>"#, escape_html(&option.text))
        })
        .collect();

    format!(
        r#"<div class="review-item"><b>{question}</b><div>{options}</div><p>Your answer: {learner}<br>Correct answer: {correct}</p></div>"#,
        question = escape_html(&item.question),
        learner = escape_html(item.learner_answer_label()),
        correct = escape_html(&item.correct_answer),
    )
}
