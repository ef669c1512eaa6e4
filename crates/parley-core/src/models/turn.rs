use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

impl From<Turn> for Value {
    fn from(turn: Turn) -> Self {
        json!({"role": turn.role.as_str(), "content": turn.content})
    }
}

/// Return a new history with one exchange appended: the user's message
/// followed by the assistant's reply.
///
/// Earlier entries are the caller's and are copied through as received,
/// whatever roles or extra keys they carry. The input slice is left
/// untouched.
pub fn append_exchange(history: &[Value], message: &str, reply: &str) -> Vec<Value> {
    let mut turns = Vec::with_capacity(history.len() + 2);
    turns.extend_from_slice(history);
    turns.push(Turn::user(message).into());
    turns.push(Turn::assistant(reply).into());
    turns
}
