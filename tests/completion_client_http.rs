// tests/completion_client_http.rs
use inkpress::application::error::ApplicationError;
use inkpress::application::ports::completion::{CompletionClient, CompletionRequest};
use inkpress::infrastructure::completion::HttpCompletionClient;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> CompletionRequest {
    CompletionRequest {
        model: "test-model".into(),
        system_prompt: "You are terse.".into(),
        user_prompt: "Say hi.".into(),
        max_tokens: 50,
        temperature: 0.5,
    }
}

fn client(server: &MockServer, key: Option<&str>) -> HttpCompletionClient {
    let endpoint = Url::parse(&format!("{}/v1/chat/completions", server.uri())).unwrap();
    HttpCompletionClient::new(endpoint, key.map(str::to_owned)).unwrap()
}

#[tokio::test]
async fn returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "max_tokens": 50,
            "messages": [
                {"role": "system", "content": "You are terse."},
                {"role": "user", "content": "Say hi."}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Hi."}},
                {"message": {"role": "assistant", "content": "Ignored."}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client(&server, Some("sk-test")).complete(request()).await.unwrap();
    assert_eq!(text, "Hi.");
}

#[tokio::test]
async fn missing_content_yields_empty_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let text = client(&server, Some("sk-test")).complete(request()).await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn non_success_status_is_an_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let err = client(&server, Some("sk-test"))
        .complete(request())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Upstream { status: Some(429), .. }));
}

#[tokio::test]
async fn missing_key_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server, None).complete(request()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Configuration(_)));
}
