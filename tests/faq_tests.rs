//! FAQ block tests.

mod common;

use common::TestServer;
use serde_json::{json, Value};

#[tokio::test]
async fn test_faq_defaults_with_empty_body() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.url("/blocks/faq"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Frequently Asked Questions");
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["background"]["kind"], "color");
}

#[tokio::test]
async fn test_faq_drops_blank_items() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.url("/blocks/faq"))
        .json(&json!({
            "faqTitle": "Shipping",
            "faqItems": [
                { "question": "How long?", "answer": " Two days. " },
                { "question": "", "answer": "" }
            ],
            "bgSwitch": true,
            "bgImage": "https://cdn.example.com/bg.jpg"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Shipping");
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["answer"], "Two days.");
    assert_eq!(body["background"]["kind"], "image");
    assert_eq!(body["background"]["value"], "https://cdn.example.com/bg.jpg");
}

#[tokio::test]
async fn test_faq_rejects_half_filled_item() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.url("/blocks/faq"))
        .json(&json!({ "faqItems": [{ "question": "Why?", "answer": "" }] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "InvalidConfiguration");
}
