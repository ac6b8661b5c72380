use std::sync::Arc;

use axum_test::TestServer;
use capability_gateway::server::config::{app_router, AppState};
use capability_gateway::server::services::orchestration::OrchestrationService;

#[tokio::test]
async fn health_check_works() {
    // Arrange
    let orchestration = Arc::new(OrchestrationService::with_base_url(
        "http://127.0.0.1:9".to_string(),
    ));
    let app = app_router(AppState { orchestration });

    // Create test server
    let server = TestServer::new(app.into_make_service()).unwrap();

    // Act
    let response = server.get("/health").await;

    // Assert
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}
