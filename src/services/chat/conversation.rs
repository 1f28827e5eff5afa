//! One-conversation turn orchestrator.
//!
//! A session owns the message history and drives one request/response turn
//! at a time: it sends the full history plus the new user message, appends
//! streamed deltas onto a single in-progress assistant message, and
//! finalizes that message when the stream completes.

use crate::errors::{AssistantError, AssistantResult, ValidationError};
use crate::services::chat::{ChatMessage, ChatRequest, ChatService};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Where the session stands with respect to its current turn.
///
/// At most one assistant message is in progress at any time; its id is
/// recorded here rather than encoded into the message id itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    Streaming { message_id: String },
    Errored { reason: String },
}

pub struct ChatSession {
    service: Arc<dyn ChatService>,
    stream_read_timeout: Duration,
    messages: Vec<ChatMessage>,
    phase: TurnPhase,
}

impl ChatSession {
    pub fn new(service: Arc<dyn ChatService>, stream_read_timeout: Duration) -> Self {
        Self {
            service,
            stream_read_timeout,
            messages: Vec::new(),
            phase: TurnPhase::Idle,
        }
    }

    /// Seeds the conversation with an assistant greeting shown before the
    /// first user message.
    pub fn with_greeting(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::assistant(content));
        self
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, TurnPhase::Streaming { .. })
    }

    /// Clears a turn left dangling by a cancelled `submit`, freezing any
    /// partial assistant content it had accumulated.
    pub fn reset(&mut self) {
        self.phase = TurnPhase::Idle;
    }

    /// Runs one full turn: appends the user message, streams the reply
    /// onto a single in-progress assistant message, and finalizes it.
    ///
    /// Returns the finalized assistant message, or `None` when the reply
    /// carried no content. A submission while a turn is still streaming is
    /// rejected with [`AssistantError::TurnInProgress`]. On error the
    /// finalized history is untouched, any partial assistant content is
    /// kept as-is and frozen, and the phase records the reason; the next
    /// `submit` may be attempted immediately.
    pub async fn submit(&mut self, input: impl Into<String>) -> AssistantResult<Option<&ChatMessage>> {
        match self.phase {
            TurnPhase::Streaming { .. } => return Err(AssistantError::TurnInProgress),
            _ => self.phase = TurnPhase::Idle,
        }

        let input = input.into();
        if input.trim().is_empty() {
            return Err(AssistantError::Validation(ValidationError::InvalidMessages(
                "user message must not be empty".to_string(),
            )));
        }

        self.messages.push(ChatMessage::user(input));
        let request = ChatRequest::from_history(&self.messages);

        let assistant_id = Uuid::new_v4().to_string();
        self.phase = TurnPhase::Streaming {
            message_id: assistant_id.clone(),
        };

        match self.run_turn(request, &assistant_id).await {
            Ok(()) => {
                self.phase = TurnPhase::Idle;
                let finalized = self.messages.iter().rev().find(|m| m.id == assistant_id);
                debug!(
                    replied = finalized.is_some(),
                    turns = self.messages.len(),
                    "chat turn finalized"
                );
                Ok(finalized)
            }
            Err(e) => {
                warn!(error = %e, "chat turn failed");
                self.phase = TurnPhase::Errored {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    async fn run_turn(&mut self, request: ChatRequest, assistant_id: &str) -> AssistantResult<()> {
        let service = self.service.clone();
        let mut stream = service.send_stream(request).await?;

        while let Some(delta) = stream.next_with_timeout(self.stream_read_timeout).await? {
            self.apply_delta(assistant_id, &delta);
        }

        Ok(())
    }

    fn apply_delta(&mut self, assistant_id: &str, delta: &str) {
        match self.messages.last_mut() {
            Some(last) if last.id == assistant_id => last.content.push_str(delta),
            _ => self
                .messages
                .push(ChatMessage::assistant_with_id(assistant_id, delta)),
        }
    }
}
