use anyhow::Context;
use server::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    if config.enforce_king_safety {
        tracing::info!("Moves that leave the mover's king in check will be rejected");
    }

    let game = server::new_game(&config);
    let app = server::router(game, &config);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}, serving {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
