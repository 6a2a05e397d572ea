//! Shared application state for axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::HttpError;

/// State shared across all handlers.
///
/// Immutable after startup. `Clone` only clones the `Arc` wrappers.
#[derive(Debug, Clone)]
pub struct AppState {
    dist_dir: Arc<PathBuf>,
    index_html: Arc<str>,
}

impl AppState {
    /// Load the console bundle from `dist_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Index`] when `dist_dir/index.html` cannot be read.
    pub fn load(dist_dir: impl Into<PathBuf>) -> Result<Self, HttpError> {
        let dist_dir = dist_dir.into();
        let path = dist_dir.join("index.html");
        let index_html =
            std::fs::read_to_string(&path).map_err(|source| HttpError::Index { path, source })?;
        tracing::debug!(dist_dir = %dist_dir.display(), "console bundle loaded");
        Ok(Self::from_parts(dist_dir, index_html))
    }

    /// Build the state from an already-loaded index document.
    pub fn from_parts(dist_dir: impl Into<PathBuf>, index_html: impl Into<Arc<str>>) -> Self {
        Self {
            dist_dir: Arc::new(dist_dir.into()),
            index_html: index_html.into(),
        }
    }

    /// Directory static files are served from.
    #[must_use]
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// The bundle's `index.html`, served for client-side routes.
    #[must_use]
    pub fn index_html(&self) -> &str {
        &self.index_html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fail_when_index_is_missing() {
        let result = AppState::load("does-not-exist");
        assert!(matches!(result, Err(HttpError::Index { .. })));
    }

    #[test]
    fn should_keep_parts() {
        let state = AppState::from_parts("dist", "<html></html>");
        assert_eq!(state.dist_dir(), Path::new("dist"));
        assert_eq!(state.index_html(), "<html></html>");
    }
}
