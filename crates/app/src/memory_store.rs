//! In-process theme store that keeps the token in memory.

use std::sync::{PoisonError, RwLock};

use zhi_domain::error::ZhiError;
use zhi_domain::theme::Theme;

use crate::ports::ThemeStore;

/// [`ThemeStore`] holding the token for the lifetime of the process.
///
/// Used where no durable storage exists (tests, non-browser hosts).
#[derive(Debug, Default)]
pub struct InMemoryThemeStore {
    slot: RwLock<Option<Theme>>,
}

impl InMemoryThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `theme`.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            slot: RwLock::new(Some(theme)),
        }
    }
}

impl ThemeStore for InMemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ZhiError> {
        Ok(*self.slot.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn save(&self, theme: Theme) -> Result<(), ZhiError> {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_empty() {
        let store = InMemoryThemeStore::new();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn should_return_saved_theme() {
        let store = InMemoryThemeStore::new();
        store.save(Theme::Nord).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Nord));
    }

    #[test]
    fn should_overwrite_previous_theme() {
        let store = InMemoryThemeStore::with_theme(Theme::Dark);
        store.save(Theme::Autumn).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Autumn));
    }
}
