//! Startup errors of the HTTP adapter.

use std::path::PathBuf;

/// Failures while preparing the HTTP state.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The bundle's `index.html` could not be read.
    #[error("failed to read console index at {}", path.display())]
    Index {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
