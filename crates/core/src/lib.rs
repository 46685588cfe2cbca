#![forbid(unsafe_code)]

pub mod api_base;
pub mod model;
pub mod quiz;
pub mod text;

pub use api_base::{ApiBase, ApiBaseError};
pub use quiz::{
    OptionMark, OptionView, QuestionView, QuizError, QuizIntent, QuizPhase, QuizReport,
    QuizSession, QuizStartError, QuizView, ReviewItem, ReviewOption,
};
