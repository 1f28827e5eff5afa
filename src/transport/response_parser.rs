use crate::errors::{AssistantError, AssistantResult, ErrorMapper};
use bytes::Bytes;
use reqwest::Response;
use serde::de::DeserializeOwned;

pub struct ResponseParser;

impl ResponseParser {
    /// Returns the body bytes of a successful response, or the mapped
    /// gateway error for a non-2xx status.
    pub async fn parse_success(response: Response) -> AssistantResult<Bytes> {
        let status = response.status();

        if status.is_success() {
            Ok(response.bytes().await?)
        } else {
            let headers = response.headers().clone();
            let body = response.bytes().await.unwrap_or_default();
            Err(ErrorMapper::from_response(status.as_u16(), &headers, &body))
        }
    }

    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> AssistantResult<T> {
        serde_json::from_slice(data).map_err(|e| {
            AssistantError::Deserialization(format!(
                "Failed to deserialize response: {}. Body: {}",
                e,
                String::from_utf8_lossy(data)
            ))
        })
    }
}
