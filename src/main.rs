use std::net::SocketAddr;

use insight_engine::bootstrap::{build_app, init_tracing, API_VERSION};
use insight_engine::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let app = build_app(&config);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            return Err(e.into());
        }
    };

    tracing::info!(
        %addr,
        api_version = API_VERSION,
        scoring = ?config.engine.scoring,
        themes = ?config.engine.themes,
        rate_limit = config.rate_limit.enabled,
        "insight engine listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
