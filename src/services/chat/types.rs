use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message in a conversation.
///
/// Content is mutable only while the message is the turn's in-progress
/// assistant reply; the session freezes it at completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub(crate) fn assistant_with_id(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Message as sent over the wire; the gateway only sees role and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: ChatRole,
    pub content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

/// Body of a chat request: the full prior history plus the new user
/// message, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<WireMessage>,
}

impl ChatRequest {
    pub fn new(messages: Vec<WireMessage>) -> Self {
        Self { messages }
    }

    pub fn from_history(history: &[ChatMessage]) -> Self {
        Self {
            messages: history.iter().map(WireMessage::from).collect(),
        }
    }
}

// Streaming envelope types. Only `choices[0].delta.content` is meaningful;
// everything else the gateway relays is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamPayload {
    #[serde(default)]
    pub choices: Vec<StreamChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamChoice {
    #[serde(default)]
    pub delta: StreamDelta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamDelta {
    #[serde(default)]
    pub content: Option<String>,
}

impl StreamPayload {
    /// Extracts the delta text, if this payload carries any.
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|content| !content.is_empty())
    }
}
