//! Integration tests for idea verification

use crate::{client_for, setup_mock_server};
use ideamarket_ai::{AssistantError, Idea, IdeaTier, VerificationRequest};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn sample_idea() -> Idea {
    Idea {
        id: "idea-123".to_string(),
        title: "AI-powered inventory forecasting".to_string(),
        description: "Predict stock-outs for small retailers.".to_string(),
        category: "SaaS".to_string(),
        tier: IdeaTier::Standard,
        price: 4900.0,
        tags: vec!["ai".to_string()],
    }
}

#[tokio::test]
async fn test_verification_round_trip() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/verify-idea"))
        .and(header("Authorization", "Bearer pk-test123456"))
        .and(body_partial_json(json!({"ideaId": "idea-123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "analysis": {
                "score": 82,
                "predictedPrice": 15000,
                "strengths": ["Large market"],
                "challenges": ["Crowded space"],
                "marketOpportunity": "Growing demand.",
                "summary": "Viable."
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let analysis = client
        .verification()
        .verify(VerificationRequest::from_idea(&sample_idea()))
        .await
        .unwrap();

    assert_eq!(analysis.score, 82);
    assert_eq!(analysis.predicted_price, 15000.0);
    assert_eq!(analysis.summary, "Viable.");
}

#[tokio::test]
async fn test_verification_credits_exhausted() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/verify-idea"))
        .respond_with(
            ResponseTemplate::new(402)
                .set_body_json(json!({"error": "AI credits exhausted. Please add more credits."})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .verification()
        .verify(VerificationRequest::from_idea(&sample_idea()))
        .await;

    match result {
        Err(AssistantError::CreditsExhausted(message)) => {
            assert!(message.contains("credits exhausted"));
        }
        other => panic!("expected CreditsExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_verification_retry_after_header() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/verify-idea"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "30")
                .set_body_json(json!({"error": "Rate limit exceeded."})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .verification()
        .verify(VerificationRequest::from_idea(&sample_idea()))
        .await;

    match result {
        Err(AssistantError::RateLimit(rate)) => assert_eq!(rate.retry_after(), Some(30)),
        other => panic!("expected RateLimit, got {other:?}"),
    }
}
