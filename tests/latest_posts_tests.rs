//! Server-rendered latest-posts block tests.

mod common;

use common::TestServer;
use serde_json::Value;

async fn get_view(server: &TestServer, query: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(server.url(&format!("/blocks/latest-posts?{}", query)))
        .send()
        .await
        .unwrap()
}

fn titles(view: &Value) -> Vec<String> {
    view["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

fn control_kinds(view: &Value) -> Vec<String> {
    view["controls"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| match c["kind"].as_str().unwrap() {
            "page" => c["number"].to_string(),
            "ellipsis" => "...".to_string(),
            other => other.to_string(),
        })
        .collect()
}

#[tokio::test]
async fn test_first_page_defaults() {
    let server = TestServer::start().await;
    server.seed(10).await;

    let response = get_view(&server, "").await;
    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-request-id"));

    let view: Value = response.json().await.unwrap();
    // Defaults: 3 posts total, 3 per page, so no pagination.
    assert_eq!(titles(&view), vec!["Post 10", "Post 9", "Post 8"]);
    assert!(view["controls"].as_array().unwrap().is_empty());
    assert_eq!(view["heading"]["text"], "Latest Posts");
    assert_eq!(view["layout"]["style"], "grid");
}

#[tokio::test]
async fn test_middle_page_window() {
    let server = TestServer::start().await;
    server.seed(30).await;

    let view: Value = get_view(&server, "totalPosts=30&postsPerPage=3&paged=5")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(view["currentPage"], 5);
    assert_eq!(view["totalPages"], 10);
    assert_eq!(titles(&view), vec!["Post 18", "Post 17", "Post 16"]);
    assert_eq!(
        control_kinds(&view),
        vec!["nav", "1", "...", "3", "4", "5", "6", "7", "...", "10", "nav"]
    );

    let controls = view["controls"].as_array().unwrap();
    assert_eq!(controls[5]["active"], true);
    let next_href = controls[10]["href"].as_str().unwrap();
    assert!(next_href.ends_with("/blocks/latest-posts?totalPosts=30&postsPerPage=3&paged=6"));
    let first_href = controls[1]["href"].as_str().unwrap();
    assert!(first_href.ends_with("/blocks/latest-posts?totalPosts=30&postsPerPage=3"));
}

#[tokio::test]
async fn test_page_past_the_end_is_clamped() {
    let server = TestServer::start().await;
    server.seed(9).await;

    let view: Value = get_view(&server, "totalPosts=30&postsPerPage=3&paged=40")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(view["currentPage"], 3);
    assert_eq!(view["totalItems"], 9);
    assert_eq!(control_kinds(&view), vec!["nav", "1", "2", "3", "nav"]);
    assert_eq!(view["controls"][4]["disabled"], true);
    assert!(view["controls"][4]["href"].is_null());
}

#[tokio::test]
async fn test_invalid_page_parameter() {
    let server = TestServer::start().await;

    let response = get_view(&server, "paged=abc").await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.headers()["x-error-code"],
        "InvalidQueryParameterValue"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "InvalidQueryParameterValue");
}

#[tokio::test]
async fn test_zero_page_size_is_a_configuration_error() {
    let server = TestServer::start().await;

    let response = get_view(&server, "postsPerPage=0").await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "InvalidConfiguration");
}

#[tokio::test]
async fn test_empty_collection() {
    let server = TestServer::start().await;

    let view: Value = get_view(&server, "postType=product&totalPosts=10")
        .await
        .json()
        .await
        .unwrap();
    assert!(view["posts"].as_array().unwrap().is_empty());
    assert!(view["controls"].as_array().unwrap().is_empty());
    assert_eq!(view["totalPages"], 1);
}
