use crate::{api::ThemeMode, PreferenceStore};

const THEME_KEY: &str = "theme";

/// Holds the current theme mode and persists changes to it
///
/// The in-memory mode is what the session uses. Failing to read or write the
/// store is logged and otherwise ignored.
pub struct ThemeController<S> {
    store: S,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub async fn load(store: S) -> ThemeController<S> {
        let mode = match store.get(THEME_KEY).await {
            Ok(None) => ThemeMode::default(),
            Ok(Some(stored)) => stored.parse::<ThemeMode>().unwrap_or_else(|err| {
                tracing::warn!(?err, "ignoring stored theme preference");
                ThemeMode::default()
            }),
            Err(err) => {
                tracing::warn!(?err, "failed loading theme preference");
                ThemeMode::default()
            }
        };
        ThemeController { store, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Err(err) = self.store.set(THEME_KEY, mode.as_str()).await {
            tracing::warn!(?err, %mode, "failed saving theme preference");
        }
    }

    pub async fn toggle(&mut self) -> ThemeMode {
        let mode = self.mode.toggled();
        self.set_mode(mode).await;
        mode
    }
}
