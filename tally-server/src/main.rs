use std::sync::Arc;
use tally_server::errors::ServerResult;
use tally_server::{app, database::ServerDatabase, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_server=debug,tower_http=debug".into()),
        )
        .init();

    // Database connection
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://tally.db".to_string());

    let db = match ServerDatabase::new(&database_url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::error!(%e, "Failed to initialize database");
            return Ok(());
        }
    };

    if let Err(e) = db.ensure_schema().await {
        tracing::error!(%e, "Failed to create schema");
        return Ok(());
    }

    // Application state and router
    let app_state = Arc::new(AppState { db });
    let app = app(app_state);

    let addr = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    tracing::info!("Starting tally server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%e, addr = %addr);
            return Ok(());
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(%e, addr = %addr);
    }

    Ok(())
}
