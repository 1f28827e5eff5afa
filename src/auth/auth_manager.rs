use crate::auth::{ApiKeyProvider, AuthProvider};
use crate::client::AssistantConfig;
use crate::errors::{AssistantError, AssistantResult, AuthenticationError};
use async_trait::async_trait;
use http::HeaderMap;
use std::sync::Arc;

/// Trait for managing authentication in requests
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Applies authentication headers to the request
    async fn apply_auth(&self, headers: &mut HeaderMap) -> AssistantResult<()>;

    /// Validates the authentication configuration
    fn validate(&self) -> AssistantResult<()>;
}

pub struct GatewayAuthManager {
    provider: Arc<dyn AuthProvider>,
}

impl GatewayAuthManager {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            provider: Arc::new(ApiKeyProvider::new(config.api_key().to_string())),
        }
    }

    /// Creates a manager with a custom provider
    pub fn with_provider(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AuthManager for GatewayAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> AssistantResult<()> {
        self.provider.authenticate(headers).await
    }

    fn validate(&self) -> AssistantResult<()> {
        if !self.provider.is_valid() {
            return Err(AssistantError::Authentication(
                AuthenticationError::InvalidApiKey("API key validation failed".to_string()),
            ));
        }
        Ok(())
    }
}
