//! Axum router assembly.

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use zhi_domain::route::AdminRoute;

use crate::spa::console;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the console under `/admin` and redirects `/` to its dashboard.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(redirect_to_console))
        .route("/admin", get(console))
        .route("/admin/", get(console))
        .route("/admin/{*path}", get(console))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn redirect_to_console() -> Redirect {
    Redirect::temporary(&AdminRoute::Dashboard.path())
}
