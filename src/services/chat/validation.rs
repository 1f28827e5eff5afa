use crate::errors::{AssistantError, AssistantResult, ValidationError};
use crate::services::chat::{ChatRequest, ChatRole};

pub struct ChatRequestValidator;

impl ChatRequestValidator {
    pub fn validate(request: &ChatRequest) -> AssistantResult<()> {
        if request.messages.is_empty() {
            return Err(AssistantError::Validation(
                ValidationError::MissingRequiredField("messages".to_string()),
            ));
        }

        if request
            .messages
            .iter()
            .any(|message| message.content.trim().is_empty())
        {
            return Err(AssistantError::Validation(ValidationError::InvalidMessages(
                "message content must not be empty".to_string(),
            )));
        }

        if request.messages.last().map(|m| m.role) != Some(ChatRole::User) {
            return Err(AssistantError::Validation(ValidationError::InvalidMessages(
                "last message must be from the user".to_string(),
            )));
        }

        Ok(())
    }
}
