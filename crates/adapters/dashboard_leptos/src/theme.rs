//! Browser side of theming.
//!
//! The active token lives in a [`ThemeService`] backed by `localStorage`.
//! After every successful selection the token is reflected on the
//! `<html data-theme>` attribute, which the stylesheet keys off.

use std::sync::Arc;

use leptos::prelude::*;
use zhi_app::ports::ThemeStore;
use zhi_app::services::theme_service::ThemeService;
use zhi_domain::error::{StorageError, ZhiError};
use zhi_domain::theme::Theme;

/// Key used to persist the theme token in `localStorage`.
pub const STORAGE_KEY: &str = "zhi-theme";

/// [`ThemeStore`] over `window.localStorage`.
///
/// The storage handle is looked up on each call so the store stays
/// `Send + Sync` and can live in Leptos context.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageThemeStore;

impl LocalStorageThemeStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Result<Option<Theme>, ZhiError> {
        let stored = Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|_| StorageError::Unavailable)?;
        match stored {
            Some(token) => Ok(Some(token.parse()?)),
            None => Ok(None),
        }
    }

    fn save(&self, theme: Theme) -> Result<(), ZhiError> {
        Self::storage()?
            .set_item(STORAGE_KEY, theme.token())
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))?;
        Ok(())
    }
}

/// Reflect `theme` on the root element. `system` clears the attribute.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        leptos::logging::warn!("no document element, theme {theme} not applied");
        return;
    };
    let result = match theme.data_theme() {
        Some(value) => root.set_attribute("data-theme", value),
        None => root.remove_attribute("data-theme"),
    };
    if let Err(err) = result {
        leptos::logging::warn!("failed to apply theme {theme}: {err:?}");
    }
}

/// Theme state shared through Leptos context.
#[derive(Clone)]
pub struct ThemeContext {
    service: Arc<ThemeService<LocalStorageThemeStore>>,
    current: RwSignal<Theme>,
}

impl ThemeContext {
    /// Reactive read of the active token.
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Select `theme`: persist, apply to the document, then notify readers.
    ///
    /// # Errors
    ///
    /// Forwards the service error; nothing changes on screen in that case.
    pub fn select(&self, theme: Theme) -> Result<Theme, ZhiError> {
        let theme = self.service.select(theme)?;
        apply_theme(theme);
        self.current.set(theme);
        Ok(theme)
    }
}

/// Build the theme service, apply the restored token and provide it.
pub fn provide_theme_context() {
    let service = ThemeService::new(LocalStorageThemeStore);
    let initial = service.current();
    apply_theme(initial);
    provide_context(ThemeContext {
        service: Arc::new(service),
        current: RwSignal::new(initial),
    });
}

/// Access the theme context.
///
/// Must be called below [`provide_theme_context`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found in context")
}
