use crate::errors::{AssistantError, AssistantResult, ValidationError};
use crate::services::verification::VerificationRequest;

pub struct VerificationRequestValidator;

impl VerificationRequestValidator {
    pub fn validate(request: &VerificationRequest) -> AssistantResult<()> {
        if request.idea_id.trim().is_empty() {
            return Err(AssistantError::Validation(
                ValidationError::MissingRequiredField("ideaId".to_string()),
            ));
        }

        if request.title.trim().is_empty() {
            return Err(AssistantError::Validation(
                ValidationError::MissingRequiredField("title".to_string()),
            ));
        }

        if request.description.trim().is_empty() {
            return Err(AssistantError::Validation(
                ValidationError::MissingRequiredField("description".to_string()),
            ));
        }

        Ok(())
    }
}
