use super::*;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::json;
use shared::protocol::{join_tokens, Token};
use tokio::{net::TcpListener, sync::Mutex};

struct CapturedRequest {
    content_type: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct MockEndpoint {
    status: StatusCode,
    response: Value,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn handle_submit(
    State(state): State<MockEndpoint>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().await.push(CapturedRequest {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body,
    });
    (state.status, Json(state.response.clone()))
}

async fn spawn_mock_endpoint(
    status: StatusCode,
    response: Value,
) -> (FilterApiClient, Arc<Mutex<Vec<CapturedRequest>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockEndpoint {
        status,
        response,
        requests: requests.clone(),
    };
    let router = Router::new()
        .route("/bfhl", post(handle_submit))
        .with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock endpoint");
    let addr = listener.local_addr().expect("mock endpoint addr");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("serve mock endpoint");
    });

    let endpoint = Url::parse(&format!("http://{addr}/bfhl")).expect("mock endpoint url");
    (FilterApiClient::new(endpoint), requests)
}

#[test]
fn rejects_text_that_is_not_json() {
    let err = parse_submission("{not json").expect_err("must reject");
    assert!(matches!(err, SubmitError::Syntax { .. }));
    assert_eq!(err.user_message(), "Invalid JSON format or API error");
}

#[test]
fn rejects_object_without_data_field() {
    let err = parse_submission(r#"{"items": ["A"]}"#).expect_err("must reject");
    assert!(matches!(err, SubmitError::Shape));
    assert_eq!(err.user_message(), "Invalid JSON format");
}

#[test]
fn rejects_non_array_data_field() {
    let err = parse_submission(r#"{"data": "A"}"#).expect_err("must reject");
    assert!(matches!(err, SubmitError::Shape));
}

#[test]
fn keeps_extra_fields_in_accepted_payload() {
    let payload =
        parse_submission(r#"{"data": ["A", 1], "client_id": "abc-123"}"#).expect("valid payload");
    assert_eq!(payload, json!({"data": ["A", 1], "client_id": "abc-123"}));
}

#[tokio::test]
async fn submit_posts_full_payload_as_json_once() {
    let (client, requests) = spawn_mock_endpoint(
        StatusCode::OK,
        json!({"numbers": ["1", "2"], "alphabets": ["A", "b"], "highest_alphabet": "b"}),
    )
    .await;

    let payload =
        parse_submission(r#"{"data": ["A", "1", "b", "2"], "roll": "x42"}"#).expect("valid payload");
    let response = client.submit(&payload).await.expect("submit succeeds");

    let requests = requests.lock().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(requests[0].body, payload);

    assert_eq!(join_tokens(&response.numbers), "1, 2");
    assert_eq!(join_tokens(&response.alphabets), "A, b");
    assert_eq!(
        response.highest_alphabet,
        Some(Token::Text("b".to_string()))
    );
}

#[tokio::test]
async fn submit_maps_error_status_to_transport_failure() {
    let (client, _requests) =
        spawn_mock_endpoint(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})).await;

    let payload = parse_submission(r#"{"data": []}"#).expect("valid payload");
    let err = client.submit(&payload).await.expect_err("must fail");
    assert!(matches!(err, SubmitError::Transport { .. }));
    assert_eq!(err.user_message(), "Invalid JSON format or API error");
}

#[tokio::test]
async fn submit_maps_unreachable_endpoint_to_transport_failure() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);

    let client = FilterApiClient::new(Url::parse(&format!("http://{addr}/bfhl")).expect("url"));
    let payload = parse_submission(r#"{"data": ["A"]}"#).expect("valid payload");
    let err = client.submit(&payload).await.expect_err("must fail");
    assert!(matches!(err, SubmitError::Transport { .. }));
}

#[tokio::test]
async fn submit_rejects_non_object_response_body() {
    let (client, _requests) = spawn_mock_endpoint(StatusCode::OK, json!("not an object")).await;

    let payload = parse_submission(r#"{"data": []}"#).expect("valid payload");
    let err = client.submit(&payload).await.expect_err("must fail");
    assert!(matches!(err, SubmitError::Transport { .. }));
    assert_eq!(err.user_message(), "Invalid JSON format or API error");
}

#[tokio::test]
async fn missing_response_fields_default_to_empty_sections() {
    let (client, _requests) = spawn_mock_endpoint(StatusCode::OK, json!({})).await;

    let payload = parse_submission(r#"{"data": ["A"]}"#).expect("valid payload");
    let response = client.submit(&payload).await.expect("submit succeeds");
    assert!(response.numbers.is_empty());
    assert!(response.alphabets.is_empty());
    assert_eq!(response.highest_alphabet, None);
}
