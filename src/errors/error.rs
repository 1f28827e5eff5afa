use crate::errors::categories::{
    AuthenticationError, ConfigurationError, DecodeError, NetworkError, RateLimitError,
    ServerError, ValidationError,
};
use thiserror::Error;

pub type AssistantResult<T> = Result<T, AssistantError>;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("AI credits exhausted: {0}")]
    CreditsExhausted(String),

    #[error("Request error: {status_code} - {message}")]
    Request { status_code: u16, message: String },

    #[error("A chat turn is already in flight")]
    TurnInProgress,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Timeout error: operation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AssistantError {
    /// Whether a caller-side retry of the same request could succeed.
    ///
    /// The client itself never retries; this only classifies for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AssistantError::RateLimit(_)
                | AssistantError::Network(_)
                | AssistantError::Server(ServerError::ServiceUnavailable(_))
                | AssistantError::Server(ServerError::InternalError(_))
                | AssistantError::Timeout { .. }
                | AssistantError::Decode(DecodeError::ReadTimeout { .. })
        )
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self, AssistantError::Authentication(_))
    }

    pub fn is_decode_error(&self) -> bool {
        matches!(self, AssistantError::Decode(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            AssistantError::Request { status_code, .. } => Some(*status_code),
            AssistantError::Authentication(_) => Some(401),
            AssistantError::CreditsExhausted(_) => Some(402),
            AssistantError::RateLimit(_) => Some(429),
            AssistantError::Server(ServerError::InternalError(_)) => Some(500),
            AssistantError::Server(ServerError::BadGateway(_)) => Some(502),
            AssistantError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            AssistantError::Server(ServerError::GatewayTimeout(_)) => Some(504),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AssistantError::Timeout { timeout_ms: 60000 }
        } else if err.is_connect() {
            AssistantError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            AssistantError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            AssistantError::Deserialization(err.to_string())
        } else {
            AssistantError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for AssistantError {
    fn from(err: url::ParseError) -> Self {
        AssistantError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
