use crate::types::Idea;
use serde::{Deserialize, Serialize};

/// Body of a verification request; the gateway builds the analyst prompt
/// from these fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub idea_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl VerificationRequest {
    pub fn from_idea(idea: &Idea) -> Self {
        Self {
            idea_id: idea.id.clone(),
            title: idea.title.clone(),
            description: idea.description.clone(),
            category: idea.category.clone(),
            tags: idea.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerificationResponse {
    #[serde(default)]
    pub success: bool,
    pub analysis: IdeaAnalysis,
}

/// Structured evaluation of one idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaAnalysis {
    /// Viability score, 0-100.
    pub score: u8,
    /// Predicted market value in USD.
    pub predicted_price: f64,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub market_opportunity: String,
    pub summary: String,
}

impl IdeaAnalysis {
    pub fn score_label(&self) -> &'static str {
        match self.score {
            80.. => "Excellent",
            60..=79 => "Good",
            40..=59 => "Fair",
            _ => "Needs Work",
        }
    }
}
