mod client_impl;
mod config;
mod factory;

pub use client_impl::AssistantClientImpl;
pub use config::AssistantConfig;
pub use factory::AssistantClientBuilder;

use crate::services::chat::{ChatService, ChatSession};
use crate::services::verification::VerificationService;

pub trait AssistantClient: Send + Sync {
    fn chat(&self) -> &dyn ChatService;
    fn verification(&self) -> &dyn VerificationService;

    /// Starts a fresh conversation bound to this client's chat service.
    fn new_session(&self) -> ChatSession;
}
