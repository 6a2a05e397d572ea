//! Console handler: static bundle files plus single-page application
//! fallback.
//!
//! Paths that name a file (they carry an extension) are served from the
//! bundle directory. Everything else is a client-side route and gets the
//! bundle's `index.html` so the console can route in the browser.

use std::convert::Infallible;
use std::path::Path;

use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use zhi_domain::route::{AdminRoute, BASE_PATH};

use crate::state::AppState;

/// `GET /admin`, `GET /admin/` and `GET /admin/*`.
///
/// Known console routes answer `200`. Unknown ones still get the index (the
/// console renders its not-found page) but with `404`.
pub async fn console(State(state): State<AppState>, request: Request) -> Response {
    let location = request.uri().path().to_owned();
    let Some(tail) = location.strip_prefix(BASE_PATH) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if Path::new(tail).extension().is_some() {
        return serve_file(&state, tail, request).await;
    }

    let status = match AdminRoute::resolve(&location) {
        Some(_) => StatusCode::OK,
        None => {
            tracing::debug!(%location, "unknown console route");
            StatusCode::NOT_FOUND
        }
    };

    (status, Html(state.index_html().to_owned())).into_response()
}

/// Serve `tail` (the path below the base) from the bundle directory.
async fn serve_file(state: &AppState, tail: &str, mut request: Request) -> Response {
    let Ok(uri) = tail.parse::<Uri>() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    *request.uri_mut() = uri;

    let result: Result<_, Infallible> = ServeDir::new(state.dist_dir()).oneshot(request).await;
    match result {
        Ok(response) => {
            if response.status() == StatusCode::NOT_FOUND {
                tracing::debug!(path = tail, "missing static file");
            }
            response.into_response()
        }
        Err(never) => match never {},
    }
}
