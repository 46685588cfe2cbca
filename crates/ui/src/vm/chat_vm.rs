use edumate_core::model::{ChatRole, ChatTranscript};
use edumate_core::text::escape_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatBubbleVm {
    pub class: &'static str,
    pub avatar: &'static str,
    /// Escaped message text, safe for `dangerous_inner_html`.
    pub html: String,
}

#[must_use]
pub fn map_chat_bubbles(transcript: &ChatTranscript) -> Vec<ChatBubbleVm> {
    transcript
        .turns()
        .iter()
        .map(|turn| match turn.role {
            ChatRole::User => ChatBubbleVm {
                class: "chat-message user",
                avatar: "👤",
                html: escape_html(&turn.text),
            },
            ChatRole::Bot => ChatBubbleVm {
                class: "chat-message bot",
                avatar: "🤖",
                html: escape_html(&turn.text),
            },
        })
        .collect()
}
