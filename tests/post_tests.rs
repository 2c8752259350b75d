//! Post endpoint tests.

mod common;

use common::TestServer;
use serde_json::{json, Value};

#[tokio::test]
async fn test_health() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_get_delete_post() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/posts"))
        .json(&json!({
            "title": "Hello world",
            "content": "<p>First words of the post.</p>"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    assert_eq!(response.headers()["content-type"], "application/json");
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_u64().unwrap();
    assert_eq!(created["postType"], "post");
    assert_eq!(created["status"], "publish");
    assert_eq!(created["link"], format!("/?p={}", id));

    let response = client
        .get(server.url(&format!("/posts/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched["title"], "Hello world");

    let response = client
        .delete(server.url(&format!("/posts/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .get(server.url(&format!("/posts/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(response.headers()["x-error-code"], "PostNotFound");
}

#[tokio::test]
async fn test_create_post_invalid_json() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.url("/posts"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "InvalidJsonDocument");
}

#[tokio::test]
async fn test_create_post_requires_title() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.url("/posts"))
        .json(&json!({ "title": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(response.headers()["x-error-code"], "InvalidInput");
}

#[tokio::test]
async fn test_invalid_post_id() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/posts/abc")).await.unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_unknown_route() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/wp-admin")).await.unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "ResourceNotFound");
    assert!(body["requestId"].is_string());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .get(server.url("/posts/999"))
        .header("x-request-id", "req-42")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(response.headers()["x-request-id"], "req-42");
}
