use serde::{Deserialize, Serialize};

/// Prefix for the synthetic bot turn shown when a message could not be delivered.
pub const SEND_FAILURE_PREFIX: &str = "⚠️ Failed to send message: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    /// Map a stored role label; anything other than `user` is the bot.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("user") {
            Self::User
        } else {
            Self::Bot
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    #[must_use]
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Append-only list of chat turns shown in the chat view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    turns: Vec<ChatTurn>,
}

impl ChatTranscript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_turns(turns: Vec<ChatTurn>) -> Self {
        Self { turns }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn::new(ChatRole::User, text));
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn::new(ChatRole::Bot, text));
    }

    /// Append a synthetic bot turn describing a failed send.
    pub fn push_failure(&mut self, detail: &str) {
        self.push_bot(format!("{SEND_FAILURE_PREFIX}{detail}"));
    }

    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Trim a draft message; blank drafts are not sent.
#[must_use]
pub fn prepare_message(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
