//! Mock HTTP transport for testing

use crate::errors::{AssistantError, AssistantResult};
use crate::transport::{ByteStream, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use http::HeaderMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock transport that queues responses and records every request.
#[derive(Clone)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<MockHttpTransportInner>>,
}

struct MockHttpTransportInner {
    json_responses: VecDeque<AssistantResult<Bytes>>,
    stream_responses: VecDeque<MockStreamResponse>,
    requests: Vec<MockRequest>,
}

#[derive(Debug, Clone)]
pub struct MockRequest {
    pub path: String,
    pub body: serde_json::Value,
    pub headers: Vec<(String, String)>,
}

enum MockStreamResponse {
    Chunks(Vec<Bytes>),
    Pending,
    Error(AssistantError),
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockHttpTransportInner {
                json_responses: VecDeque::new(),
                stream_responses: VecDeque::new(),
                requests: Vec::new(),
            })),
        }
    }

    /// Queues a successful buffered JSON response
    pub fn with_json_response(self, response: serde_json::Value) -> Self {
        let bytes = Bytes::from(response.to_string());
        self.inner
            .lock()
            .unwrap()
            .json_responses
            .push_back(Ok(bytes));
        self
    }

    /// Queues a buffered error response
    pub fn with_error_response(self, error: AssistantError) -> Self {
        self.inner
            .lock()
            .unwrap()
            .json_responses
            .push_back(Err(error));
        self
    }

    /// Queues a successful streamed response delivered as the given chunks
    pub fn with_stream_chunks(self, chunks: Vec<Bytes>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .stream_responses
            .push_back(MockStreamResponse::Chunks(chunks));
        self
    }

    /// Queues a streamed response built from SSE frame strings
    pub fn with_stream_frames(self, frames: &[&str]) -> Self {
        let chunks = frames
            .iter()
            .map(|f| Bytes::from(f.to_string()))
            .collect();
        self.with_stream_chunks(chunks)
    }

    /// Queues a stream that never produces a chunk
    pub fn with_pending_stream(self) -> Self {
        self.inner
            .lock()
            .unwrap()
            .stream_responses
            .push_back(MockStreamResponse::Pending);
        self
    }

    /// Queues a streaming request failure
    pub fn with_stream_error(self, error: AssistantError) -> Self {
        self.inner
            .lock()
            .unwrap()
            .stream_responses
            .push_back(MockStreamResponse::Error(error));
        self
    }

    pub fn requests(&self) -> Vec<MockRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    /// Verifies that a request was made to the given path
    pub fn verify_request(&self, path: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.path == path)
    }

    /// Verifies that a request to the path had a body containing the text
    pub fn verify_request_with_body(&self, path: &str, body_contains: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.path == path && r.body.to_string().contains(body_contains))
    }

    fn record(&self, path: &str, body: &serde_json::Value, headers: &HeaderMap) {
        let headers = headers
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    v.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        self.inner.lock().unwrap().requests.push(MockRequest {
            path: path.to_string(),
            body: body.clone(),
            headers,
        });
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
        headers: HeaderMap,
    ) -> AssistantResult<Bytes> {
        self.record(path, body, &headers);

        self.inner
            .lock()
            .unwrap()
            .json_responses
            .pop_front()
            .unwrap_or_else(|| {
                Err(AssistantError::Unknown(
                    "No mock response configured".to_string(),
                ))
            })
    }

    async fn post_stream(
        &self,
        path: &str,
        body: &serde_json::Value,
        headers: HeaderMap,
    ) -> AssistantResult<ByteStream> {
        self.record(path, body, &headers);

        let response = self
            .inner
            .lock()
            .unwrap()
            .stream_responses
            .pop_front()
            .ok_or_else(|| {
                AssistantError::Unknown("No mock stream response configured".to_string())
            })?;

        match response {
            MockStreamResponse::Chunks(chunks) => {
                let items: Vec<AssistantResult<Bytes>> = chunks.into_iter().map(Ok).collect();
                Ok(Box::pin(stream::iter(items)))
            }
            MockStreamResponse::Pending => Ok(Box::pin(stream::pending())),
            MockStreamResponse::Error(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_json_response() {
        let mock = MockHttpTransport::new()
            .with_json_response(serde_json::json!({"success": true}));

        let result = mock
            .post_json(
                "/verify-idea",
                &serde_json::json!({"ideaId": "idea-1"}),
                HeaderMap::new(),
            )
            .await;

        assert!(result.is_ok());
        assert!(mock.verify_request("/verify-idea"));
        assert!(mock.verify_request_with_body("/verify-idea", "idea-1"));
    }

    #[tokio::test]
    async fn test_mock_transport_without_response_errors() {
        let mock = MockHttpTransport::new();
        let result = mock
            .post_json("/verify-idea", &serde_json::json!({}), HeaderMap::new())
            .await;
        assert!(result.is_err());
        assert_eq!(mock.request_count(), 1);
    }
}
