mod conversation;
mod service;
mod stream;
mod types;
mod validation;


pub use conversation::{ChatSession, TurnPhase};
pub use service::{ChatService, ChatServiceImpl, CHAT_PATH};
pub use stream::AssistantStream;
pub use types::{ChatMessage, ChatRequest, ChatRole, StreamChoice, StreamDelta, StreamPayload, WireMessage};
pub use validation::ChatRequestValidator;
