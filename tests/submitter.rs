//! Request outcomes of the Symphony API client against a stub server.

mod common;

use axum::http::StatusCode;
use common::StubApi;
use serde_json::json;
use symphony_seed::clients::{ApiResponse, SymphonyClient, entities::Community, errors::Error};

fn respond_by_path(path: &str, _: usize) -> (StatusCode, String) {
    match path {
        "/created" => (StatusCode::CREATED, r#"{"_id": "abc123", "name": "Queen"}"#.to_string()),
        "/empty" => (StatusCode::OK, String::new()),
        "/plain" => (StatusCode::OK, "User created successfully".to_string()),
        "/conflict" => (StatusCode::CONFLICT, "username already taken".to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
    }
}

#[tokio::test]
async fn test_created_with_json_body() {
    let stub = StubApi::start(StatusCode::OK, respond_by_path).await;
    let client = SymphonyClient::new(&stub.base_url).unwrap();

    let response = client.post("/created", &json!({"name": "Queen"})).await;
    assert_eq!(
        response,
        Some(ApiResponse::Json(json!({"_id": "abc123", "name": "Queen"})))
    );
    assert_eq!(response.unwrap().identifier().as_deref(), Some("abc123"));

    assert_eq!(stub.posts_to("/created"), vec![json!({"name": "Queen"})]);
}

#[tokio::test]
async fn test_ok_with_empty_body() {
    let stub = StubApi::start(StatusCode::OK, respond_by_path).await;
    let client = SymphonyClient::new(&stub.base_url).unwrap();

    assert_eq!(client.get("/empty").await, Some(ApiResponse::Empty));
    assert_eq!(
        client.post("/empty", &json!({})).await,
        Some(ApiResponse::Empty)
    );
}

#[tokio::test]
async fn test_ok_with_plain_text_body() {
    let stub = StubApi::start(StatusCode::OK, respond_by_path).await;
    let client = SymphonyClient::new(&stub.base_url).unwrap();

    assert_eq!(client.get("/plain").await, Some(ApiResponse::Empty));
}

#[tokio::test]
async fn test_error_status_yields_no_result() {
    let stub = StubApi::start(StatusCode::OK, respond_by_path).await;
    let client = SymphonyClient::new(&stub.base_url).unwrap();

    assert_eq!(client.post("/conflict", &json!({})).await, None);
    assert_eq!(client.get("/anything-else").await, None);
}

#[tokio::test]
async fn test_unreachable_yields_no_result() {
    // Nothing listens on port 1
    let client = SymphonyClient::new("http://127.0.0.1:1").unwrap();

    assert_eq!(client.get("/").await, None);
    let community = Community {
        community_name: "Rock Lovers".to_string(),
        description: "A community for rock lovers".to_string(),
    };
    assert_eq!(client.create_community(&community).await, None);
}

#[tokio::test]
async fn test_typed_endpoint_body() {
    let stub = StubApi::accepting(StatusCode::OK).await;
    let client = SymphonyClient::new(&stub.base_url).unwrap();

    let community = Community {
        community_name: "Jazz Enthusiasts".to_string(),
        description: "A community for jazz enthusiasts".to_string(),
    };
    assert_eq!(
        client.create_community(&community).await,
        Some(ApiResponse::Empty)
    );
    assert_eq!(
        stub.posts_to("/api/community/create"),
        vec![json!({
            "community_name": "Jazz Enthusiasts",
            "description": "A community for jazz enthusiasts",
        })]
    );
}

#[tokio::test]
async fn test_liveness_probe() {
    let healthy = StubApi::accepting(StatusCode::OK).await;
    let client = SymphonyClient::new(&healthy.base_url).unwrap();
    assert!(client.check_liveness().await.is_ok());

    let failing = StubApi::accepting(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = SymphonyClient::new(&failing.base_url).unwrap();
    match client.check_liveness().await {
        Err(Error::ApiUnavailable { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Hello, World!");
        }
        other => panic!("expected ApiUnavailable, got {other:?}"),
    }

    let unreachable = SymphonyClient::new("http://127.0.0.1:1").unwrap();
    assert!(matches!(
        unreachable.check_liveness().await,
        Err(Error::Http(_))
    ));
}
