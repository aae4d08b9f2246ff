use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;

use unirecords::router::init_router;
use unirecords::state::init_app_state;
use unirecords_config::ServerConfig;
use unirecords_observability::{init_tracing, shutdown_tracer, spawn_metrics_server};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    if let Err(e) = run().await {
        tracing::error!(error = ?e, "Server failed");
        eprintln!("❌ {:#}", e);
        shutdown_tracer().await;
        std::process::exit(1);
    }

    shutdown_tracer().await;
}

async fn run() -> anyhow::Result<()> {
    let server_config = ServerConfig::from_env();
    let state = init_app_state().await?;
    let app = init_router(state);

    let metrics_addr: SocketAddr = server_config
        .metrics_addr
        .parse()
        .with_context(|| format!("Invalid METRICS_ADDR {}", server_config.metrics_addr))?;
    spawn_metrics_server(metrics_addr).await?;

    let listener = tokio::net::TcpListener::bind(&server_config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", server_config.addr))?;

    tracing::info!(addr = %server_config.addr, "Server listening");
    println!("🚀 Server running on http://{}", server_config.addr);
    println!("📚 Swagger UI available at http://{}/swagger-ui", server_config.addr);
    println!("📖 Scalar UI available at http://{}/scalar", server_config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
