mod access;
mod dashboard;
mod health;
mod roles;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api_routes())
        .fallback(health::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/version", get(health::version))
        // Static role and chair tables
        .route("/roles", get(roles::list_roles))
        .route("/chairs", get(roles::list_chairs))
        // Access queries for the calling member
        .route("/access/check", get(access::check_access))
        .route("/access/pages", get(access::list_accessible_pages))
        // Dashboard route guard
        .route("/dashboard", get(dashboard::view_root))
        .route("/dashboard/{*path}", get(dashboard::view_page))
}
