use crate::auth::AuthManager;
use crate::errors::AssistantResult;
use crate::services::chat::{AssistantStream, ChatRequest, ChatRequestValidator};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Path of the streaming chat function on the gateway.
pub const CHAT_PATH: &str = "/chat-assistant";

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Sends the conversation so far and returns the streamed reply.
    async fn send_stream(&self, request: ChatRequest) -> AssistantResult<AssistantStream>;
}

pub struct ChatServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    max_line_bytes: usize,
}

impl ChatServiceImpl {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        max_line_bytes: usize,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            max_line_bytes,
        }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn send_stream(&self, request: ChatRequest) -> AssistantResult<AssistantStream> {
        ChatRequestValidator::validate(&request)?;

        let mut headers = http::HeaderMap::new();
        self.auth_manager.apply_auth(&mut headers).await?;

        debug!(messages = request.messages.len(), "starting chat turn");

        let body = serde_json::to_value(&request)?;
        let bytes = self.transport.post_stream(CHAT_PATH, &body, headers).await?;

        Ok(AssistantStream::new(bytes, self.max_line_bytes))
    }
}
