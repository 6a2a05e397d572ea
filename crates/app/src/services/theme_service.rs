//! Theme service: the single owner of the active theme token.

use std::sync::{PoisonError, RwLock};

use zhi_domain::error::ZhiError;
use zhi_domain::theme::Theme;

use crate::ports::ThemeStore;

/// Process-wide theme state.
///
/// Exactly one token is active at any time. It is initialised from the
/// store (falling back to [`Theme::default`]) and only ever changed through
/// [`ThemeService::select`].
pub struct ThemeService<S> {
    store: S,
    current: RwLock<Theme>,
}

impl<S: ThemeStore> ThemeService<S> {
    /// Create the service and load the persisted token.
    ///
    /// A missing token or an unreadable store yields the default token; the
    /// store failure is logged, not returned.
    pub fn new(store: S) -> Self {
        let initial = match store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stored theme, using default");
                Theme::default()
            }
        };
        tracing::debug!(theme = %initial, "theme initialised");
        Self {
            store,
            current: RwLock::new(initial),
        }
    }

    /// The active token.
    pub fn current(&self) -> Theme {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make `theme` the active token and persist it.
    ///
    /// # Errors
    ///
    /// Returns the store's error when persisting fails; the active token is
    /// left unchanged in that case.
    #[tracing::instrument(skip(self))]
    pub fn select(&self, theme: Theme) -> Result<Theme, ZhiError> {
        // Held across the save so the store and `current` move together.
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        self.store.save(theme)?;
        *current = theme;
        Ok(theme)
    }

    /// Parse `token` and select it.
    ///
    /// # Errors
    ///
    /// Returns [`ZhiError::Validation`] for an unknown token, or the store's
    /// error when persisting fails.
    pub fn select_token(&self, token: &str) -> Result<Theme, ZhiError> {
        let theme: Theme = token.parse()?;
        self.select(theme)
    }
}
