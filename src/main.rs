use std::net::SocketAddr;

use adspace::config::server::ServerConfig;
use adspace::middleware::rate_limit::{CLEANUP_INTERVAL, spawn_cleanup};
use adspace::router::init_router;
use adspace::state::init_app_state;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    adspace_observability::init_tracing();

    let server_config = ServerConfig::from_env();
    start_metrics_server(&server_config).await?;

    let state = init_app_state();
    if let Some(limiter) = &state.rate_limiter {
        spawn_cleanup(limiter.clone(), CLEANUP_INTERVAL);
    }
    let app = init_router(state);

    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("🚀 Server running on http://{}", address);
    info!("📚 Swagger UI available at http://{}/swagger-ui", address);
    info!("📖 Scalar UI available at http://{}/scalar", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    adspace_observability::shutdown_tracer().await;
    Ok(())
}

#[cfg(feature = "observability")]
async fn start_metrics_server(config: &ServerConfig) -> anyhow::Result<()> {
    let Some(handle) = adspace_observability::init_metrics() else {
        return Ok(());
    };

    let address = config.metrics_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("📈 Metrics available at http://{}/metrics", address);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, adspace_observability::metrics_app(handle)).await {
            tracing::error!(error = %e, "Metrics server stopped");
        }
    });

    Ok(())
}

#[cfg(not(feature = "observability"))]
async fn start_metrics_server(_config: &ServerConfig) -> anyhow::Result<()> {
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
