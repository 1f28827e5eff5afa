//! Integration tests for the streaming chat assistant

use crate::{client_for, setup_mock_server};
use ideamarket_ai::{AssistantError, TurnPhase};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn sse_body(deltas: &[&str]) -> String {
    let mut body = String::from(":keep-alive\n\n");
    for delta in deltas {
        body.push_str(&format!(
            "data: {}\n\n",
            json!({"choices": [{"delta": {"content": delta}}]})
        ));
    }
    body.push_str("data: [DONE]\n");
    body
}

#[tokio::test]
async fn test_chat_turn_end_to_end() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat-assistant"))
        .and(header("Authorization", "Bearer pk-test123456"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(sse_body(&["Hello", " world"]), "text/event-stream"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = client.new_session();

    let reply = session
        .submit("Suggest a FinTech startup idea")
        .await
        .unwrap()
        .unwrap()
        .clone();

    assert_eq!(reply.content, "Hello world");
    assert_eq!(session.phase(), &TurnPhase::Idle);
    assert_eq!(session.messages().len(), 2);
}

#[tokio::test]
async fn test_chat_stream_without_sentinel_still_completes() {
    let server = setup_mock_server().await;

    let body = format!(
        "data: {}\n",
        json!({"choices": [{"delta": {"content": "done"}}]})
    );
    Mock::given(method("POST"))
        .and(path("/chat-assistant"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = client.new_session();

    let reply = session.submit("hi").await.unwrap().unwrap().clone();
    assert_eq!(reply.content, "done");
}

#[tokio::test]
async fn test_chat_rate_limit_error_surfaced() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat-assistant"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"error": "Rate limit exceeded. Please try again in a moment."})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = client.new_session();

    let err = session.submit("hi").await.unwrap_err();
    assert!(matches!(err, AssistantError::RateLimit(_)));
    assert!(err.to_string().contains("Rate limit exceeded"));
    assert!(matches!(session.phase(), TurnPhase::Errored { .. }));
}

#[tokio::test]
async fn test_chat_error_without_body_gets_generic_message() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat-assistant"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = client.new_session();

    let err = session.submit("hi").await.unwrap_err();
    match err {
        AssistantError::Server(server_error) => {
            assert!(server_error.to_string().contains("HTTP error: 503"));
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_turn_is_retryable_end_to_end() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat-assistant"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "AI service error"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat-assistant"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(sse_body(&["recovered"]), "text/event-stream"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = client.new_session();

    session.submit("first").await.unwrap_err();
    let reply = session.submit("second").await.unwrap().unwrap().clone();

    assert_eq!(reply.content, "recovered");
    assert_eq!(session.phase(), &TurnPhase::Idle);
}
