pub mod api;
pub mod database;
pub mod errors;
pub mod queries;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<database::ServerDatabase>,
}

/// Build the application router. Shared between the binary and the
/// integration tests so both serve the same app.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // REST API
        .route("/users/", post(api::create_user).get(api::list_users))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
