use crate::auth::AuthManager;
use crate::errors::{AssistantError, AssistantResult};
use crate::services::verification::{
    IdeaAnalysis, VerificationRequest, VerificationRequestValidator, VerificationResponse,
};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Path of the verification function on the gateway.
pub const VERIFY_PATH: &str = "/verify-idea";

#[async_trait]
pub trait VerificationService: Send + Sync {
    /// Requests an AI analysis of one idea and returns the evaluation.
    async fn verify(&self, request: VerificationRequest) -> AssistantResult<IdeaAnalysis>;
}

pub struct VerificationServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
}

impl VerificationServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_manager: Arc<dyn AuthManager>) -> Self {
        Self {
            transport,
            auth_manager,
        }
    }
}

#[async_trait]
impl VerificationService for VerificationServiceImpl {
    async fn verify(&self, request: VerificationRequest) -> AssistantResult<IdeaAnalysis> {
        VerificationRequestValidator::validate(&request)?;

        let mut headers = http::HeaderMap::new();
        self.auth_manager.apply_auth(&mut headers).await?;

        let body = serde_json::to_value(&request)?;
        let bytes = self.transport.post_json(VERIFY_PATH, &body, headers).await?;
        let response: VerificationResponse = ResponseParser::parse_json(&bytes)?;

        let analysis = response.analysis;
        if analysis.score > 100 {
            return Err(AssistantError::Deserialization(format!(
                "viability score out of range: {}",
                analysis.score
            )));
        }

        debug!(
            idea_id = %request.idea_id,
            score = analysis.score,
            "idea verification complete"
        );

        Ok(analysis)
    }
}
