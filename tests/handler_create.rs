mod common;

use axum_test::TestServer;
use canonical_shortener::domain::repositories::UrlRepository;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_create_success() {
    let (server, repository) = common::create_test_server();

    let response = server
        .post("/create")
        .json(&json!({ "original_url": "http://test.com" }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.header("content-type"), "application/json");

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "http://test.com");
    assert_eq!(json["short_url"], "http://sho.rt/s/28UZbv");
    assert_eq!(json["click_count"], 0);
    assert!(json["expiry"].is_string());

    let stored = repository.find("http://sho.rt/s/28UZbv").await.unwrap();
    assert_eq!(stored.original_url, "http://test.com");
}

#[tokio::test]
async fn test_create_equivalent_urls_share_short_url() {
    let (server, repository) = common::create_test_server();

    let first = server
        .post("/create")
        .json(&json!({ "original_url": "https://example.com?a=1&b=2" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/create")
        .json(&json!({ "original_url": "https://www.example.com?b=2&a=1" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["short_url"], "http://sho.rt/s/0aCO2h");
    assert_eq!(first["short_url"], second["short_url"]);
    assert_eq!(second["original_url"], "https://example.com?a=1&b=2");
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn test_create_resubmission_resets_click_count() {
    let (server, repository) = common::create_test_server();

    server
        .post("/create")
        .json(&json!({ "original_url": "http://test.com" }))
        .await;
    server.get("/s/28UZbv").await;
    assert_eq!(
        repository.find("http://sho.rt/s/28UZbv").await.unwrap().click_count,
        1
    );

    let response = server
        .post("/create")
        .json(&json!({ "original_url": "http://test.com" }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(
        repository.find("http://sho.rt/s/28UZbv").await.unwrap().click_count,
        0
    );
}

#[tokio::test]
async fn test_create_truncates_oversized_url() {
    let (server, _repository) = common::create_test_server();

    let long_url = format!("http://test.com/{}", "a".repeat(3000));

    let response = server
        .post("/create")
        .json(&json!({ "original_url": long_url }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let stored = json["original_url"].as_str().unwrap();
    assert_eq!(stored.chars().count(), 2048);
    assert!(long_url.starts_with(stored));
}

#[tokio::test]
async fn test_create_malformed_json() {
    let (server, repository) = common::create_test_server();

    let response = server
        .post("/create")
        .text("{\"original_url\": ")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_create_missing_field() {
    let (server, _repository) = common::create_test_server();

    let response = server
        .post("/create")
        .json(&json!({ "url": "http://test.com" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_create_empty_url() {
    let (server, repository) = common::create_test_server();

    let response = server
        .post("/create")
        .json(&json!({ "original_url": "" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_create_unsupported_scheme() {
    let (server, repository) = common::create_test_server();

    let response = server
        .post("/create")
        .json(&json!({ "original_url": "ftp://files.example.com/archive.tar" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_create_unparsable_url() {
    let (server, repository) = common::create_test_server();

    let response = server
        .post("/create")
        .json(&json!({ "original_url": "not a url" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "parse_error");
    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_create_times_out_on_slow_storage() {
    let state = common::create_test_state(
        Arc::new(common::SlowRepository),
        std::time::Duration::from_millis(50),
    );
    let server =
        TestServer::new(canonical_shortener::routes::router(state, common::PREFIX)).unwrap();

    let response = server
        .post("/create")
        .json(&json!({ "original_url": "http://test.com" }))
        .await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "timeout");
}
