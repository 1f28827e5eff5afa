use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Invalid API key format: {0}")]
    InvalidApiKeyFormat(String),

    #[error("Invalid gateway URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Invalid decoder buffer limit: {0}")]
    InvalidBufferLimit(String),
}

#[derive(Error, Debug, Clone)]
pub enum AuthenticationError {
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),
}

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid messages: {0}")]
    InvalidMessages(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },
}

#[derive(Error, Debug, Clone)]
pub enum RateLimitError {
    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded { message: String },

    #[error("Too many requests: {message}")]
    TooManyRequests {
        message: String,
        retry_after_secs: Option<u64>,
    },
}

impl RateLimitError {
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            RateLimitError::TooManyRequests {
                retry_after_secs, ..
            } => *retry_after_secs,
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Stream interrupted: {0}")]
    StreamInterrupted(String),
}

#[derive(Error, Debug, Clone)]
pub enum ServerError {
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),
}

/// Errors raised while decoding a streamed response body.
#[derive(Error, Debug, Clone)]
pub enum DecodeError {
    #[error("Malformed data frame: {reason}")]
    MalformedFrame { reason: String },

    #[error("Pending line exceeded {limit} bytes without a newline")]
    BufferOverflow { limit: usize },

    #[error("Invalid UTF-8 in stream: {0}")]
    InvalidUtf8(String),

    #[error("No stream data received for {timeout_ms}ms")]
    ReadTimeout { timeout_ms: u64 },
}
