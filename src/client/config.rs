use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(skip_serializing)]
    pub api_key: Secret<String>,

    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// Overall request timeout, including streamed body reads.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Longest quiet gap tolerated between stream chunks before the turn
    /// is abandoned with a decode error.
    #[serde(default = "default_stream_read_timeout")]
    pub stream_read_timeout: Duration,

    /// Decoder cap on a single pending line.
    #[serde(default = "default_max_line_bytes")]
    pub max_line_bytes: usize,

    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl AssistantConfig {
    /// Creates a new AssistantConfig with the given publishable API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: default_base_url(),
            timeout: default_timeout(),
            stream_read_timeout: default_stream_read_timeout(),
            max_line_bytes: default_max_line_bytes(),
            max_connections: default_max_connections(),
            user_agent: default_user_agent(),
        }
    }

    /// Creates a new AssistantConfig from environment variables
    ///
    /// Reads the following environment variables:
    /// - IDEAMARKET_API_KEY (required)
    /// - IDEAMARKET_GATEWAY_URL (optional)
    pub fn from_env() -> crate::errors::AssistantResult<Self> {
        let api_key = std::env::var("IDEAMARKET_API_KEY").map_err(|_| {
            crate::errors::AssistantError::Configuration(
                crate::errors::ConfigurationError::MissingApiKey(
                    "IDEAMARKET_API_KEY environment variable not found".to_string(),
                ),
            )
        })?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("IDEAMARKET_GATEWAY_URL") {
            let url = Url::parse(&base_url).map_err(|e| {
                crate::errors::AssistantError::Configuration(
                    crate::errors::ConfigurationError::InvalidBaseUrl(format!(
                        "Invalid IDEAMARKET_GATEWAY_URL: {}",
                        e
                    )),
                )
            })?;
            config.base_url = url;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> crate::errors::AssistantResult<()> {
        let api_key = self.api_key.expose_secret();

        if api_key.is_empty() {
            return Err(crate::errors::AssistantError::Configuration(
                crate::errors::ConfigurationError::MissingApiKey("API key is empty".to_string()),
            ));
        }

        if api_key.len() < 10 {
            return Err(crate::errors::AssistantError::Configuration(
                crate::errors::ConfigurationError::InvalidApiKeyFormat(
                    "API key is too short".to_string(),
                ),
            ));
        }

        if self.timeout.as_secs() == 0 {
            return Err(crate::errors::AssistantError::Configuration(
                crate::errors::ConfigurationError::InvalidTimeout(
                    "Timeout must be greater than 0".to_string(),
                ),
            ));
        }

        if self.stream_read_timeout.as_millis() == 0 {
            return Err(crate::errors::AssistantError::Configuration(
                crate::errors::ConfigurationError::InvalidTimeout(
                    "Stream read timeout must be greater than 0".to_string(),
                ),
            ));
        }

        if self.max_line_bytes == 0 {
            return Err(crate::errors::AssistantError::Configuration(
                crate::errors::ConfigurationError::InvalidBufferLimit(
                    "Decoder line limit must be greater than 0".to_string(),
                ),
            ));
        }

        Ok(())
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_stream_read_timeout(mut self, timeout: Duration) -> Self {
        self.stream_read_timeout = timeout;
        self
    }

    pub fn with_max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.max_line_bytes = max_line_bytes;
        self
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

fn default_base_url() -> Url {
    Url::parse("https://gateway.ideamarket.app/functions/v1").unwrap()
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_stream_read_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_max_line_bytes() -> usize {
    crate::transport::DEFAULT_MAX_LINE_BYTES
}

fn default_max_connections() -> usize {
    100
}

fn default_user_agent() -> String {
    format!("ideamarket-ai/{}", env!("CARGO_PKG_VERSION"))
}
