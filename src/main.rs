//! Server entry point: load config, connect, ensure the complaints table, serve.

use complaints_api::{
    app, connect, ensure_complaints_table, AppState, Config, SqliteComplaintStore,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("complaints_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    if config.auth_token.is_some() {
        tracing::warn!("database auth token is set but the SQLite driver does not use it");
    }

    let pool = connect(&config).await?;
    ensure_complaints_table(&pool).await?;
    let state = AppState::new(SqliteComplaintStore::new(pool.clone()));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
