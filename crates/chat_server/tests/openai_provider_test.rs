//! OpenAIProvider tests against a mock completions endpoint

use chat_server::{LLMError, LLMProvider, LlmMessage, OpenAIProvider, Role};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn conversation() -> Vec<LlmMessage> {
    vec![
        LlmMessage::new(Role::System, "You answer menu questions."),
        LlmMessage::new(Role::User, "What desserts do you offer?"),
    ]
}

fn provider_for(server: &MockServer) -> OpenAIProvider {
    OpenAIProvider::new("sk-test")
        .with_base_url(server.uri())
        .with_model("test-model")
}

#[tokio::test]
async fn returns_trimmed_first_choice() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "  Key lime pie and lava cake.\n" },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reply = provider_for(&mock_server)
        .complete(&conversation())
        .await
        .expect("reply");
    assert_eq!(reply, "Key lime pie and lava cake.");

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "What desserts do you offer?");
}

#[tokio::test]
async fn error_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server)
        .complete(&conversation())
        .await
        .unwrap_err();
    match err {
        LLMError::Api(msg) => assert!(msg.contains("401") && msg.contains("bad key")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_choices_is_empty_completion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
        )
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server)
        .complete(&conversation())
        .await
        .unwrap_err();
    assert!(matches!(err, LLMError::EmptyCompletion));
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server)
        .complete(&conversation())
        .await
        .unwrap_err();
    assert!(matches!(err, LLMError::Json(_)));
}
