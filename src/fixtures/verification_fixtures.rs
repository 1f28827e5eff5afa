//! Idea verification fixtures

use serde_json::json;

pub fn verification_response() -> serde_json::Value {
    json!({
        "success": true,
        "analysis": {
            "score": 82,
            "predictedPrice": 15000,
            "strengths": [
                "Large addressable market",
                "Clear recurring-revenue model"
            ],
            "challenges": [
                "Crowded competitive landscape",
                "High customer acquisition cost"
            ],
            "marketOpportunity": "Growing demand for B2B automation tooling.",
            "summary": "A viable idea with strong fundamentals and a clear path to revenue."
        }
    })
}

pub fn verification_response_with_score(score: u16) -> serde_json::Value {
    let mut response = verification_response();
    response["analysis"]["score"] = json!(score);
    response
}

pub fn sample_idea() -> crate::types::Idea {
    crate::types::Idea {
        id: "idea-123".to_string(),
        title: "AI-powered inventory forecasting".to_string(),
        description: "Predict stock-outs for small retailers using sales history.".to_string(),
        category: "SaaS".to_string(),
        tier: crate::types::IdeaTier::Standard,
        price: 4900.0,
        tags: vec!["ai".to_string(), "retail".to_string()],
    }
}
