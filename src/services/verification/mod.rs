mod service;
mod types;
mod validation;


pub use service::{VerificationService, VerificationServiceImpl, VERIFY_PATH};
pub use types::{IdeaAnalysis, VerificationRequest, VerificationResponse};
pub use validation::VerificationRequestValidator;
