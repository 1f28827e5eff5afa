use crate::errors::{
    AssistantError, AuthenticationError, RateLimitError, ServerError, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Error body shape returned by the gateway functions: `{ "error": "..." }`.
///
/// The field is optional; a missing message falls back to a status-based one.
#[derive(Debug, Deserialize, Serialize)]
pub struct GatewayErrorBody {
    pub error: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps an HTTP status code and optional gateway error body to an error.
    pub fn map_status(status_code: u16, body: Option<GatewayErrorBody>) -> AssistantError {
        let message = body
            .and_then(|b| b.error)
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));

        match status_code {
            400 => AssistantError::Validation(ValidationError::InvalidRequest(message)),
            401 => AssistantError::Authentication(AuthenticationError::InvalidApiKey(message)),
            402 => AssistantError::CreditsExhausted(message),
            403 => AssistantError::Authentication(AuthenticationError::Unauthorized(message)),
            429 => AssistantError::RateLimit(RateLimitError::RateLimitExceeded { message }),
            500 => AssistantError::Server(ServerError::InternalError(message)),
            502 => AssistantError::Server(ServerError::BadGateway(message)),
            503 => AssistantError::Server(ServerError::ServiceUnavailable(message)),
            504 => AssistantError::Server(ServerError::GatewayTimeout(message)),
            _ => AssistantError::Request {
                status_code,
                message,
            },
        }
    }

    /// Maps a response, extracting `retry-after` for rate-limited requests.
    pub fn map_status_with_headers(
        status_code: u16,
        headers: &http::HeaderMap,
        body: &str,
    ) -> AssistantError {
        let parsed: Option<GatewayErrorBody> = serde_json::from_str(body).ok();
        let mut error = Self::map_status(status_code, parsed);

        if status_code == 429 {
            if let Some(retry_after) = Self::extract_retry_after(headers) {
                let message = match &error {
                    AssistantError::RateLimit(RateLimitError::RateLimitExceeded { message }) => {
                        message.clone()
                    }
                    _ => "Rate limit exceeded".to_string(),
                };
                error = AssistantError::RateLimit(RateLimitError::TooManyRequests {
                    message,
                    retry_after_secs: Some(retry_after),
                });
            }
        }

        error
    }

    pub fn extract_retry_after(headers: &http::HeaderMap) -> Option<u64> {
        headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
    }

    pub fn from_response(status: u16, headers: &http::HeaderMap, body: &[u8]) -> AssistantError {
        let body_str = String::from_utf8_lossy(body);
        Self::map_status_with_headers(status, headers, &body_str)
    }
}
