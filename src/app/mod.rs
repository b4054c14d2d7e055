use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::{FileStore, KeyValueStore};
use crate::theme::{
    resolve_theme, ResolvedTheme, SettingsPatch, ThemeResult, ThemeSettings, ThemeStore,
};

/// Theme context handed to every screen at startup.
///
/// Consumers read [`theme`](Self::theme) and route every change through the
/// setters; the provider keeps the resolved theme in sync with the store.
#[derive(Debug)]
pub struct ThemeProvider {
    store: ThemeStore,
    resolved: ResolvedTheme,
}

impl ThemeProvider {
    /// Starts with defaults and loads persisted settings in the background.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::from_store(ThemeStore::initialize(storage))
    }

    pub fn new_blocking(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::from_store(ThemeStore::initialize_blocking(storage))
    }

    /// File-backed provider rooted at the configured storage directory.
    pub fn from_app_config(config: &AppConfig) -> Self {
        tracing::debug!(path = %config.storage_dir.display(), "theme settings directory");
        Self::new_blocking(Arc::new(FileStore::new(config.storage_dir.clone())))
    }

    fn from_store(store: ThemeStore) -> Self {
        let resolved = resolve_theme(store.settings());
        Self { store, resolved }
    }

    pub fn theme(&self) -> &ResolvedTheme {
        &self.resolved
    }

    pub fn settings(&self) -> &ThemeSettings {
        self.store.settings()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Call from the event loop; returns true when the theme changed.
    pub fn poll(&mut self) -> bool {
        if self.store.poll_pending_load() {
            self.refresh();
            return true;
        }
        false
    }

    pub fn wait_until_loaded(&mut self) -> bool {
        if self.store.wait_for_pending_load() {
            self.refresh();
            return true;
        }
        false
    }

    pub fn set_palette(&mut self, palette_id: impl Into<String>) {
        self.store.set_palette(palette_id);
        self.refresh();
    }

    pub fn set_accent(&mut self, accent_id: impl Into<String>) {
        self.store.set_accent(accent_id);
        self.refresh();
    }

    pub fn update_settings(&mut self, patch: &SettingsPatch) {
        self.store.update_settings(patch);
        self.refresh();
    }

    pub fn colors_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(&self.resolved.colors)?)
    }

    /// Flushes outstanding saves; the provider is unusable afterwards.
    pub fn shutdown(mut self) {
        self.store.wait_for_pending_writes();
        tracing::debug!("theme provider shut down");
    }

    fn refresh(&mut self) {
        self.resolved = resolve_theme(self.store.settings());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::theme::{find_palette, HIGH_CONTRAST_TEXT, SETTINGS_STORAGE_KEY};

    #[test]
    fn provider_starts_from_defaults() {
        let provider = ThemeProvider::new_blocking(Arc::new(MemoryStore::new()));
        assert_eq!(provider.settings(), &ThemeSettings::default());
        assert_eq!(provider.theme().palette.id, "warm");
        assert_eq!(provider.theme().colors.accent, "#D4AF37");
    }

    #[test]
    fn mutations_re_resolve_theme() {
        let mut provider = ThemeProvider::new_blocking(Arc::new(MemoryStore::new()));

        provider.set_palette("ocean");
        provider.set_accent("ruby");
        let ocean = find_palette("ocean").unwrap();
        assert_eq!(provider.theme().colors.primary, ocean.colors.primary);
        assert_eq!(provider.theme().colors.accent, "#E0115F");
        assert_eq!(provider.theme().colors.text, ocean.colors.text);

        provider.update_settings(&SettingsPatch {
            high_contrast: Some(true),
            ..SettingsPatch::default()
        });
        assert_eq!(provider.theme().colors.text, HIGH_CONTRAST_TEXT);
        provider.shutdown();
    }

    #[test]
    fn background_load_refreshes_theme() {
        let storage = MemoryStore::with_entry(
            SETTINGS_STORAGE_KEY,
            r#"{"paletteId":"lavender","accentId":"gold"}"#,
        );
        let mut provider = ThemeProvider::new(Arc::new(storage));
        assert!(provider.wait_until_loaded());
        assert!(!provider.is_loading());
        assert_eq!(provider.theme().palette.id, "lavender");
        assert!(!provider.poll());
    }

    #[test]
    fn colors_json_uses_camel_case_fields() {
        let provider = ThemeProvider::new_blocking(Arc::new(MemoryStore::new()));
        let json = provider.colors_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["primary"], "#C1440E");
        assert_eq!(value["surfaceVariant"], "#F5E6D8");
    }
}
