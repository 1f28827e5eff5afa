use crate::auth::AuthManager;
use crate::client::{AssistantClient, AssistantClientImpl, AssistantConfig};
use crate::errors::{AssistantError, AssistantResult, ConfigurationError};
use crate::transport::HttpTransport;
use std::sync::Arc;

pub struct AssistantClientBuilder {
    config: Option<AssistantConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    auth_manager: Option<Arc<dyn AuthManager>>,
}

impl AssistantClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
            auth_manager: None,
        }
    }

    pub fn with_config(mut self, config: AssistantConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = Some(AssistantConfig::new(api_key));
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_auth_manager(mut self, auth_manager: Arc<dyn AuthManager>) -> Self {
        self.auth_manager = Some(auth_manager);
        self
    }

    pub fn build(self) -> AssistantResult<Arc<dyn AssistantClient>> {
        let config = self.config.ok_or_else(|| {
            AssistantError::Configuration(ConfigurationError::MissingApiKey(
                "API key must be provided".to_string(),
            ))
        })?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(crate::transport::ReqwestTransport::new(&config)?),
        };

        let auth_manager = self
            .auth_manager
            .unwrap_or_else(|| Arc::new(crate::auth::GatewayAuthManager::new(&config)));

        Ok(Arc::new(AssistantClientImpl::new(
            config,
            transport,
            auth_manager,
        )))
    }
}

impl Default for AssistantClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
