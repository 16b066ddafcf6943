use gamecraft_llm::{Error, GameGenerator, GenerationRequest};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::providers::{
    deepseek::DeepseekTestSetup, load_fixture, openai::OpenAITestSetup, sse_body,
    VendorTestSetup,
};

fn sse_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/event-stream")
        .insert_header("cache-control", "no-cache")
}

fn snake_request() -> GenerationRequest {
    GenerationRequest::new("贪吃蛇", "使用方向键控制，吃到食物后变长")
}

/// Stream several deltas and check both the result and every progress snapshot
async fn run_streaming_test<T: VendorTestSetup>() {
    let config = T::get_config();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(T::expected_body()))
        .respond_with(sse_response(sse_body(&["<html>", "<body>", "</body>", "</html>"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = T::create_generator(&mock_server.uri(), Some("sk-test"));
    assert_eq!(generator.vendor().display_name, config.name);

    let mut seen = Vec::new();
    let mut record = |text: &str| seen.push(text.to_string());
    let html = generator
        .generate(&snake_request(), Some(&mut record))
        .await
        .unwrap_or_else(|e| panic!("{} generation failed: {e}", config.name));

    assert_eq!(html, "<html><body></body></html>");
    assert_eq!(
        seen,
        vec![
            "<html>",
            "<html><body>",
            "<html><body></body>",
            "<html><body></body></html>"
        ]
    );
}

/// Check the exact message layout and the vendor-specific penalty fields
async fn run_request_body_test<T: VendorTestSetup>() {
    let config = T::get_config();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(sse_response(sse_body(&["ok"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = T::create_generator(&mock_server.uri(), Some("sk-test"));
    generator.generate(&snake_request(), None).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();

    assert_eq!(body["model"], json!(config.model));
    assert_eq!(body["stream"], json!(true));
    assert_eq!(body["messages"][0]["role"], json!("system"));
    assert_eq!(
        body["messages"][0]["content"],
        json!(gamecraft_llm::prompt::SYSTEM_INSTRUCTION)
    );
    assert_eq!(body["messages"][1]["role"], json!("user"));
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("贪吃蛇"));
    assert!(user.contains("使用方向键控制，吃到食物后变长"));

    assert_eq!(body.get("presence_penalty").is_some(), config.sends_penalties);
    assert_eq!(body.get("frequency_penalty").is_some(), config.sends_penalties);
}

/// A malformed frame between two good ones must not abort the stream
async fn run_malformed_frame_test<T: VendorTestSetup>() {
    let mock_server = MockServer::start().await;
    let body = concat!(
        "data: {\"choices\":[{\"delta\":{\"content\":\"<html>\"}}]}\n\n",
        "data: {\"choices\":[{\"delta\":{\"content\"\n\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\"</html>\"}}]}\n\n",
        "data: [DONE]\n\n"
    );

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(sse_response(body.to_string()))
        .mount(&mock_server)
        .await;

    let generator = T::create_generator(&mock_server.uri(), Some("sk-test"));
    let mut calls = 0;
    let mut count = |_: &str| calls += 1;
    let html = generator
        .generate(&snake_request(), Some(&mut count))
        .await
        .expect("Malformed frame must not fail the call");

    assert_eq!(html, "<html></html>");
    assert_eq!(calls, 2);
}

/// Non-2xx responses surface the vendor message plus remediation hints
async fn run_remote_rejection_test<T: VendorTestSetup>() {
    let config = T::get_config();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": {"message": "invalid_api_key"}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = T::create_generator(&mock_server.uri(), Some("sk-wrong"));
    let mut calls = 0;
    let mut count = |_: &str| calls += 1;
    let error = generator
        .generate(&snake_request(), Some(&mut count))
        .await
        .expect_err("401 must fail the call");

    assert!(error.to_string().contains("invalid_api_key"));
    assert!(error.to_string().contains("稍后重试"));
    match error {
        Error::Remote { vendor, status, .. } => {
            assert_eq!(vendor, config.name);
            assert_eq!(status, 401);
        }
        other => panic!("Expected remote error, got {other:?}"),
    }
    assert_eq!(calls, 0);
}

/// Without any credential no request may leave the process
async fn run_missing_credential_test<T: VendorTestSetup>() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(sse_response(sse_body(&["unreachable"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let generator = T::create_generator(&mock_server.uri(), None);
    let error = generator
        .generate(&snake_request(), None)
        .await
        .expect_err("Missing credential must fail");

    assert!(error.is_preflight());
    assert!(matches!(error, Error::MissingCredential));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

/// A per-request credential takes precedence over the instance default
async fn run_credential_override_test<T: VendorTestSetup>() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-request"))
        .respond_with(sse_response(sse_body(&["override"])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut generator = T::create_generator(&mock_server.uri(), None);
    let request = snake_request().with_api_key("sk-request");
    assert_eq!(generator.generate(&request, None).await.unwrap(), "override");

    // Setting an instance credential does not shadow the request's own.
    generator.set_credential("sk-instance".to_string());
    assert_eq!(generator.generate(&request, None).await.unwrap(), "override");
}

#[tokio::test]
async fn test_openai_streaming() {
    run_streaming_test::<OpenAITestSetup>().await;
}

#[tokio::test]
async fn test_deepseek_streaming() {
    run_streaming_test::<DeepseekTestSetup>().await;
}

#[tokio::test]
async fn test_openai_request_body() {
    run_request_body_test::<OpenAITestSetup>().await;
}

#[tokio::test]
async fn test_deepseek_request_body() {
    run_request_body_test::<DeepseekTestSetup>().await;
}

#[tokio::test]
async fn test_openai_malformed_frame() {
    run_malformed_frame_test::<OpenAITestSetup>().await;
}

#[tokio::test]
async fn test_deepseek_malformed_frame() {
    run_malformed_frame_test::<DeepseekTestSetup>().await;
}

#[tokio::test]
async fn test_openai_remote_rejection() {
    run_remote_rejection_test::<OpenAITestSetup>().await;
}

#[tokio::test]
async fn test_deepseek_remote_rejection() {
    run_remote_rejection_test::<DeepseekTestSetup>().await;
}

#[tokio::test]
async fn test_openai_missing_credential() {
    run_missing_credential_test::<OpenAITestSetup>().await;
}

#[tokio::test]
async fn test_deepseek_missing_credential() {
    run_missing_credential_test::<DeepseekTestSetup>().await;
}

#[tokio::test]
async fn test_openai_credential_override() {
    run_credential_override_test::<OpenAITestSetup>().await;
}

#[tokio::test]
async fn test_deepseek_credential_override() {
    run_credential_override_test::<DeepseekTestSetup>().await;
}

#[tokio::test]
async fn test_deepseek_keepalive_comments_are_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(sse_response(load_fixture("deepseek_keepalive.sse")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = DeepseekTestSetup::create_generator(&mock_server.uri(), Some("sk-test"));
    let html = generator
        .generate(&GenerationRequest::new("2048", "4x4 网格"), None)
        .await
        .unwrap();

    assert_eq!(html, "<html><body>2048</body></html>");
}
