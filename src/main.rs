use std::net::SocketAddr;

use capability_gateway::configuration::get_configuration;
use capability_gateway::server::config::configure_app;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = get_configuration()?;
    let app = configure_app(&settings)?;

    let addr: SocketAddr = format!(
        "{}:{}",
        settings.application.host, settings.application.port
    )
    .parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting server on {}", listener.local_addr()?);
    info!(
        "Proxying orchestration requests to {}",
        settings.orchestration.base_url
    );

    axum::serve(listener, app).await?;

    Ok(())
}
