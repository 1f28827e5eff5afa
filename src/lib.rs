//! Client-side AI core of the IdeaMarket marketplace.
//!
//! Two gateway functions back the marketplace's AI features: a chat
//! assistant that streams its reply as newline-delimited `data:` frames,
//! and an idea-verification function that returns a buffered analysis.
//! This crate owns the transport, the streaming decoder, the chat-turn
//! orchestration, and the error taxonomy for both.

pub mod auth;
pub mod client;
pub mod errors;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod mocks;

pub use client::{AssistantClient, AssistantClientBuilder, AssistantClientImpl, AssistantConfig};
pub use errors::{AssistantError, AssistantResult};

pub use services::{
    chat::{
        AssistantStream, ChatMessage, ChatRequest, ChatRole, ChatService, ChatSession, TurnPhase,
    },
    verification::{IdeaAnalysis, VerificationRequest, VerificationService},
};
pub use types::{Idea, IdeaTier};

pub mod prelude {
    pub use crate::client::{AssistantClient, AssistantClientBuilder, AssistantConfig};
    pub use crate::errors::{AssistantError, AssistantResult};
    pub use crate::services::chat::{ChatMessage, ChatRole, ChatSession, TurnPhase};
    pub use crate::services::verification::{IdeaAnalysis, VerificationRequest};
    pub use crate::types::{Idea, IdeaTier};
}
