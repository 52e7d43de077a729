use tokio::net::TcpListener;

use sift::config::{CredentialSource, EnvCredentials, ServerConfig};
use sift::dispatch::http::HttpDispatch;
use sift::server::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    // A missing .env is normal in deployed environments.
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    if EnvCredentials.api_key().is_some_and(|key| !key.is_empty()) {
        tracing::info!("OPENAI_API_KEY found");
    } else {
        tracing::warn!("OPENAI_API_KEY not set; /analyze will answer 500 until it is");
    }

    let dispatch = HttpDispatch::new(config.upstream_url.clone())?;
    tracing::info!(upstream = dispatch.endpoint(), "completion endpoint configured");

    let app = router(AppState::new(EnvCredentials, dispatch));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .inspect_err(|e| tracing::error!("failed to bind {}: {e}", config.bind_addr))?;
    tracing::info!("sift listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("sift shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
