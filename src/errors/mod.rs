mod categories;
mod error;
mod mapping;

pub use categories::{
    AuthenticationError, ConfigurationError, DecodeError, NetworkError, RateLimitError,
    ServerError, ValidationError,
};
pub use error::{AssistantError, AssistantResult};
pub use mapping::{ErrorMapper, GatewayErrorBody};
