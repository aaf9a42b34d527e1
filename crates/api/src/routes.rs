use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/about", get(handlers::get_about))
        .route("/find", get(handlers::find_genes))
        .route("/search", get(handlers::search_genes))
        .route("/databases", get(handlers::list_databases))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
