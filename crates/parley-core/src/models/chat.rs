use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::CoreError;
use crate::models::turn::append_exchange;

/// Body of an inbound chat request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// Earlier turns, kept exactly as the client sent them.
    #[serde(default)]
    pub conversation_history: Vec<Value>,
}

impl ChatRequest {
    /// Parse a raw request body. Fails if the body is not JSON or has no
    /// `message`.
    pub fn parse(body: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Build the reply for this request given the assistant's text.
    pub fn reply(&self, assistant: impl Into<String>) -> ChatReply {
        let response = assistant.into();
        let conversation_history =
            append_exchange(&self.conversation_history, &self.message, &response);
        ChatReply::success(response, conversation_history)
    }
}

/// Body of a chat response, either the new exchange or an error message.
///
/// Serialized with a `success` flag derived from the variant so web clients
/// can branch on it without inspecting the status code.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatReply {
    Success {
        response: String,
        conversation_history: Vec<Value>,
    },
    Failure {
        error: String,
    },
}

impl ChatReply {
    pub fn success(response: String, conversation_history: Vec<Value>) -> Self {
        ChatReply::Success {
            response,
            conversation_history,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ChatReply::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ChatReply::Success { .. })
    }
}

impl Serialize for ChatReply {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChatReply::Success {
                response,
                conversation_history,
            } => {
                let mut state = serializer.serialize_struct("ChatReply", 3)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("response", response)?;
                state.serialize_field("conversationHistory", conversation_history)?;
                state.end()
            }
            ChatReply::Failure { error } => {
                let mut state = serializer.serialize_struct("ChatReply", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}
