use career_compass::{
    api::{create_router, AppState},
    config::Config,
    services::{JsonFileSource, RecommendationEngine},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load the program catalog once; a missing file leaves the engine empty
    let source = JsonFileSource::new(&config.programs_path);
    let engine = RecommendationEngine::load(&source).await;
    if engine.is_empty() {
        tracing::warn!(
            path = %config.programs_path,
            "Serving with an empty program catalog"
        );
    }

    let app = create_router(AppState::new(engine));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
