use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::configuration::Settings;
use crate::server::{
    handlers::{capability::get_orchestration, health::health_check},
    services::orchestration::OrchestrationService,
};

#[derive(Clone)]
pub struct AppState {
    pub orchestration: Arc<OrchestrationService>,
}

pub fn configure_app(settings: &Settings) -> Result<Router, reqwest::Error> {
    let orchestration = Arc::new(OrchestrationService::new(&settings.orchestration)?);

    Ok(app_router(AppState { orchestration }))
}

async fn log_request(request: Request, next: Next) -> Result<Response, StatusCode> {
    info!("{} {}", request.method(), request.uri().path());
    Ok(next.run(request).await)
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/capability/:key/orchestration", get(get_orchestration))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
