// tests/client_test.rs — HTTP scoring client against a mock service

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;

use embedscope::client::{HttpScoringClient, ScoringBackend};
use embedscope::infra::errors::PlaygroundError;
use embedscope::playground::Item;

const MODEL: &str = "openai/text-embedding-3-small";

fn items() -> Vec<Item> {
    vec![
        Item::new("a", "#DA291C", "Manchester United"),
        Item::new("b", "blue", "Man Utd"),
    ]
}

fn good_body() -> String {
    json!({
        "model": MODEL,
        "similarity": {
            "cosine": {"a": {"b": 0.12}, "b": {"a": 0.12}},
            "dot_product": {"a": {"b": 0.88}, "b": {"a": 0.88}},
            "euclidean": {"a": {"b": 0.49}, "b": {"a": 0.49}}
        },
        "pca": {
            "a": {"x": 0.5, "y": 0.0, "z": -0.1},
            "b": {"x": -0.5, "y": 0.0, "z": 0.1}
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_score_posts_model_and_items() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/process")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "model": MODEL,
            "items": [
                {"id": "a", "color": "#DA291C", "text": "Manchester United"},
                {"id": "b", "color": "blue", "text": "Man Utd"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(good_body())
        .create_async()
        .await;

    let client = HttpScoringClient::new(format!("{}/", server.url()));
    let result = client.score(MODEL, &items()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.model, MODEL);
    assert_eq!(result.similarity.cosine["a"]["b"], 0.12);
    assert_eq!(result.pca["b"].x, -0.5);
}

#[tokio::test]
async fn test_server_error_is_network_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/process")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = HttpScoringClient::new(server.url());
    let err = client.score(MODEL, &items()).await.unwrap_err();
    assert!(matches!(err, PlaygroundError::Network(_)), "got {err:?}");
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_service_error_payload() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/process")
        .with_status(200)
        .with_body(r#"{"error": "Between 2 and 20 items are required"}"#)
        .create_async()
        .await;

    let client = HttpScoringClient::new(server.url());
    let err = client.score(MODEL, &items()).await.unwrap_err();
    match err {
        PlaygroundError::Service(msg) => assert!(msg.contains("Between 2 and 20")),
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/process")
        .with_status(200)
        .with_body(r#"{"model": "x", "similarity": 3}"#)
        .create_async()
        .await;

    let client = HttpScoringClient::new(server.url());
    let err = client.score(MODEL, &items()).await.unwrap_err();
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn test_result_missing_an_item_is_decode_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/process")
        .with_status(200)
        .with_body(good_body())
        .create_async()
        .await;

    let mut three = items();
    three.push(Item::new("c", "green", "Red Devils"));

    let client = HttpScoringClient::new(server.url());
    let err = client.score(MODEL, &three).await.unwrap_err();
    assert_eq!(err.kind(), "decode");
    assert!(err.to_string().ends_with(": c"));
}

#[tokio::test]
async fn test_unreachable_service_is_network_failure() {
    let client = HttpScoringClient::new("http://127.0.0.1:1").with_timeout(Duration::from_secs(2));
    let err = client.score(MODEL, &items()).await.unwrap_err();
    assert!(err.is_remote());
    assert_eq!(err.kind(), "network");
}

#[tokio::test]
async fn test_remaining_funds() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/remaining_funds")
        .with_status(200)
        .with_body(r#"{"funds": 25.0, "costs_incurred": 30.5}"#)
        .create_async()
        .await;

    let client = HttpScoringClient::new(server.url());
    let account = client.remaining_funds().await.unwrap();

    mock.assert_async().await;
    assert_eq!(account.funds, 25.0);
    assert_eq!(account.costs_incurred, 30.5);
    assert!(account.is_exhausted());
}
