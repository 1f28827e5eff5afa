//! Gateway error body fixtures

use serde_json::json;

pub fn rate_limit_body() -> serde_json::Value {
    json!({
        "error": "Rate limit exceeded. Please try again in a moment."
    })
}

pub fn credits_exhausted_body() -> serde_json::Value {
    json!({
        "error": "AI credits exhausted. Please add more credits."
    })
}

pub fn server_error_body() -> serde_json::Value {
    json!({
        "error": "AI service error"
    })
}

/// A non-2xx body with no message at all
pub fn empty_error_body() -> serde_json::Value {
    json!({})
}
