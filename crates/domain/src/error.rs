//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Top-level error for the console's domain and application layers.
#[derive(Debug, thiserror::Error)]
pub enum ZhiError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// Input that does not satisfy a domain invariant.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown theme token `{0}`")]
    UnknownTheme(String),
}

/// Failure of a persistence backend behind a port.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    /// The backend cannot be reached at all (e.g. storage disabled).
    #[error("storage backend unavailable")]
    Unavailable,
    /// The backend was reachable but refused the operation.
    #[error("storage backend rejected the operation: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_zhi_error() {
        let err: ZhiError = ValidationError::UnknownTheme("pink".into()).into();
        assert!(matches!(
            err,
            ZhiError::Validation(ValidationError::UnknownTheme(ref token)) if token == "pink"
        ));
    }

    #[test]
    fn should_convert_storage_error_into_zhi_error() {
        let err: ZhiError = StorageError::Unavailable.into();
        assert!(matches!(err, ZhiError::Storage(StorageError::Unavailable)));
    }

    #[test]
    fn should_display_unknown_theme_token() {
        let err = ValidationError::UnknownTheme("pink".into());
        assert_eq!(err.to_string(), "unknown theme token `pink`");
    }
}
