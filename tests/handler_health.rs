mod common;

use axum_test::TestServer;
use canonical_shortener::infrastructure::persistence::MemoryUrlRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _repository) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let state = common::create_test_state(
        Arc::new(common::SlowRepository),
        std::time::Duration::from_secs(1),
    );
    let server =
        TestServer::new(canonical_shortener::routes::router(state, common::PREFIX)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}

#[tokio::test]
async fn test_health_endpoint_with_custom_prefix() {
    let app = canonical_shortener::routes::router(
        common::create_test_state(
            Arc::new(MemoryUrlRepository::new()),
            std::time::Duration::from_secs(1),
        ),
        "/",
    );
    let server = TestServer::new(app).unwrap();

    server.get("/health").await.assert_status_ok();
    assert_eq!(server.get("/abc123").await.status_code(), 404);
    assert_eq!(server.get("/abc").await.status_code(), 400);
}
