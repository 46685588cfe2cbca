mod chat_vm;
mod quiz_vm;

pub use chat_vm::{ChatBubbleVm, map_chat_bubbles};
pub use quiz_vm::{QuizOutcome, QuizVm, ReviewVm, start_quiz};
