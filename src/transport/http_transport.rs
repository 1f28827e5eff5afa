use crate::client::AssistantConfig;
use crate::errors::{AssistantError, AssistantResult, NetworkError};
use crate::transport::{ByteStream, ResponseParser, StreamHandler};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Transport seam between the services and the gateway.
///
/// Both gateway functions are plain POSTs; the two methods differ only in
/// whether the response body is buffered or handed back as a byte stream.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POSTs a JSON body and returns the buffered response body.
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
        headers: HeaderMap,
    ) -> AssistantResult<Bytes>;

    /// POSTs a JSON body and returns the response body as a byte stream.
    async fn post_stream(
        &self,
        path: &str,
        body: &serde_json::Value,
        headers: HeaderMap,
    ) -> AssistantResult<ByteStream>;
}

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    default_headers: HeaderMap,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport from configuration
    pub fn new(config: &AssistantConfig) -> AssistantResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.max_connections)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                AssistantError::Network(NetworkError::ConnectionFailed(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            default_headers: HeaderMap::new(),
        })
    }

    /// Creates a new ReqwestTransport with base URL and timeout
    pub fn with_base_url(base_url: &str, timeout: Duration) -> AssistantResult<Self> {
        let url = Url::parse(base_url)?;

        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AssistantError::Network(NetworkError::ConnectionFailed(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        Ok(Self {
            client,
            base_url: url,
            default_headers: HeaderMap::new(),
        })
    }

    /// Sets default headers to include in all requests
    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    /// Builds a full URL from a path
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Merges default headers with request-specific headers
    fn merge_headers(&self, request_headers: HeaderMap) -> HeaderMap {
        let mut headers = self.default_headers.clone();
        for (key, value) in request_headers.iter() {
            headers.insert(key.clone(), value.clone());
        }
        headers
    }

    fn build_post(
        &self,
        path: &str,
        body: &serde_json::Value,
        headers: HeaderMap,
    ) -> reqwest::RequestBuilder {
        let url = self.build_url(path);
        debug!(%url, "sending gateway request");

        let mut request = self.client.post(&url);
        for (key, value) in self.merge_headers(headers).iter() {
            request = request.header(key, value);
        }
        request.json(body)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
        headers: HeaderMap,
    ) -> AssistantResult<Bytes> {
        let response = self.build_post(path, body, headers).send().await?;
        ResponseParser::parse_success(response).await
    }

    async fn post_stream(
        &self,
        path: &str,
        body: &serde_json::Value,
        headers: HeaderMap,
    ) -> AssistantResult<ByteStream> {
        let response = self.build_post(path, body, headers).send().await?;
        StreamHandler::handle_stream(response).await
    }
}
