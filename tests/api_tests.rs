//! Tests for the HTTP surface: health probe, sample prompts, and the
//! prompt endpoint's status-code contract.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use chainchat_server::agent::keywords::KeywordRule;
use chainchat_server::agent::{AgentRouter, KeywordMatcher, ToolDescriptor, ToolRegistry};
use chainchat_server::api::{
    health::health_handler, prompt::prompt_handler, samples::samples_handler,
};
use chainchat_server::config::{Config, MatcherStrategy};
use chainchat_server::tools::MoralisClient;
use chainchat_server::AppState;

fn test_config() -> Config {
    Config {
        port: 0,
        openai_api_key: "test-openai-key".to_string(),
        moralis_api_key: "test-moralis-key".to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        matcher_strategy: MatcherStrategy::Keyword,
        summary_enabled: false,
    }
}

fn create_test_app() -> Router {
    let mut registry = ToolRegistry::new();
    registry.register(ToolDescriptor::new(
        "getWalletNetWorth",
        &["address", "chain"],
        "stat_card: total net worth in USD",
        Box::new(|_api, _params| Box::pin(async { Ok(json!({"total_networth_usd": "42000"})) })),
    ));

    let agent = AgentRouter::new(
        registry,
        Box::new(KeywordMatcher::with_rules(vec![KeywordRule {
            keyword: "net worth",
            tool: "getWalletNetWorth",
        }])),
        MoralisClient::new("test-moralis-key"),
    );

    let state = AppState {
        config: test_config(),
        agent: Arc::new(agent),
    };

    Router::new()
        .route("/", get(health_handler))
        .route("/api/samples", get(samples_handler))
        .route("/api/prompt", post(prompt_handler))
        .with_state(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn prompt_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/prompt")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn health_probe_reports_ok() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], true);
}

#[tokio::test]
async fn samples_endpoint_lists_prompts() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/samples")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], true);
    assert!(!body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_prompt_is_a_400() {
    let app = create_test_app();
    let response = app.oneshot(prompt_request(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Prompt is required");
    assert_eq!(body["status"], false);
}

#[tokio::test]
async fn blank_prompt_is_a_400() {
    let app = create_test_app();
    let response = app
        .oneshot(prompt_request(json!({"prompt": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn routed_prompt_returns_data_payload() {
    let app = create_test_app();
    let response = app
        .oneshot(prompt_request(json!({
            "prompt": "net worth of 0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["message"], body["data"]);
    let data: Value = serde_json::from_str(body["data"].as_str().unwrap()).unwrap();
    assert_eq!(data["total_networth_usd"], "42000");
    assert_eq!(body["summary"], "");
}

#[tokio::test]
async fn routing_miss_is_delivered_as_200_with_diagnostic() {
    let app = create_test_app();
    let response = app
        .oneshot(prompt_request(json!({"prompt": "compose a limerick"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "No tool matched this prompt");
    assert_eq!(body["status"], true);
    assert!(body.get("data").is_none());
}
