//! Theme store port: persistence of the selected theme token.
//!
//! Synchronous on purpose: the browser adapter is backed by `localStorage`,
//! which never suspends.

use std::sync::Arc;

use zhi_domain::error::ZhiError;
use zhi_domain::theme::Theme;

/// Persists the theme token chosen by the user.
pub trait ThemeStore {
    /// Read the persisted token, `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`ZhiError::Storage`] when the backend cannot be read, or
    /// [`ZhiError::Validation`] when it holds an unknown token.
    fn load(&self) -> Result<Option<Theme>, ZhiError>;

    /// Persist `theme`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ZhiError::Storage`] when the backend refuses the write.
    fn save(&self, theme: Theme) -> Result<(), ZhiError>;
}

impl<T: ThemeStore> ThemeStore for Arc<T> {
    fn load(&self) -> Result<Option<Theme>, ZhiError> {
        (**self).load()
    }

    fn save(&self, theme: Theme) -> Result<(), ZhiError> {
        (**self).save(theme)
    }
}
