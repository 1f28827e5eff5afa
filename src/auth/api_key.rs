use crate::auth::AuthProvider;
use crate::errors::{AssistantResult, AuthenticationError, ConfigurationError, AssistantError};
use async_trait::async_trait;
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

/// Publishable-key provider for the marketplace gateway.
///
/// The gateway functions expect a bearer token in the `Authorization`
/// header; there is no further key structure to check beyond length.
pub struct ApiKeyProvider {
    api_key: SecretString,
}

impl ApiKeyProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
        }
    }

    /// Creates a new ApiKeyProvider from an existing SecretString
    pub fn from_secret(api_key: SecretString) -> Self {
        Self { api_key }
    }

    /// Validates the API key format
    pub fn validate(&self) -> AssistantResult<()> {
        let key = self.api_key.expose_secret();

        if key.is_empty() {
            return Err(AssistantError::Configuration(
                ConfigurationError::MissingApiKey("API key is empty".to_string()),
            ));
        }

        if key.len() < 10 {
            return Err(AssistantError::Configuration(
                ConfigurationError::InvalidApiKeyFormat(
                    "API key is too short (minimum 10 characters)".to_string(),
                ),
            ));
        }

        Ok(())
    }

    fn validate_key_format(key: &str) -> bool {
        !key.is_empty() && key.len() >= 10
    }
}

#[async_trait]
impl AuthProvider for ApiKeyProvider {
    async fn authenticate(&self, headers: &mut HeaderMap) -> AssistantResult<()> {
        let api_key = self.api_key.expose_secret();

        if !Self::validate_key_format(api_key) {
            return Err(AssistantError::Authentication(
                AuthenticationError::InvalidApiKey(
                    "API key must be at least 10 characters".to_string(),
                ),
            ));
        }

        let auth_value = format!("Bearer {}", api_key);
        headers.insert(
            "Authorization",
            auth_value.parse().map_err(|_| {
                AssistantError::Authentication(AuthenticationError::InvalidApiKey(
                    "Failed to create Authorization header".to_string(),
                ))
            })?,
        );

        Ok(())
    }

    fn is_valid(&self) -> bool {
        Self::validate_key_format(self.api_key.expose_secret())
    }
}
