use crate::auth::AuthManager;
use crate::client::{AssistantClient, AssistantConfig};
use crate::services::chat::{ChatService, ChatServiceImpl, ChatSession};
use crate::services::verification::{VerificationService, VerificationServiceImpl};
use crate::transport::HttpTransport;
use std::sync::Arc;

pub struct AssistantClientImpl {
    config: AssistantConfig,
    chat_service: Arc<ChatServiceImpl>,
    verification_service: VerificationServiceImpl,
}

impl AssistantClientImpl {
    pub fn new(
        config: AssistantConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        let chat_service = Arc::new(ChatServiceImpl::new(
            transport.clone(),
            auth_manager.clone(),
            config.max_line_bytes,
        ));

        let verification_service = VerificationServiceImpl::new(transport, auth_manager);

        Self {
            config,
            chat_service,
            verification_service,
        }
    }
}

impl AssistantClient for AssistantClientImpl {
    fn chat(&self) -> &dyn ChatService {
        self.chat_service.as_ref()
    }

    fn verification(&self) -> &dyn VerificationService {
        &self.verification_service
    }

    fn new_session(&self) -> ChatSession {
        ChatSession::new(
            self.chat_service.clone() as Arc<dyn ChatService>,
            self.config.stream_read_timeout,
        )
    }
}
