use std::sync::Arc;

use super::settings::{SettingsPatch, ThemeSettings};
use super::ThemeResult;
use crate::storage::KeyValueStore;
use crate::worker::{spawn_serial, spawn_worker, PendingResult, PollState, SerialWorker};

pub const SETTINGS_STORAGE_KEY: &str = "theme_settings";

/// Owns the mutable theme settings for the lifetime of the app.
///
/// Loads run on a worker thread. Saves are fire-and-forget and go through one
/// writer thread in mutation order, so the newest settings are the ones kept.
pub struct ThemeStore {
    settings: ThemeSettings,
    storage: Arc<dyn KeyValueStore>,
    pending_load: Option<PendingResult<Option<ThemeSettings>>>,
    writer: Option<SerialWorker<ThemeSettings>>,
}

impl ThemeStore {
    /// Defaults only; nothing is read from storage.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            settings: ThemeSettings::default(),
            storage,
            pending_load: None,
            writer: None,
        }
    }

    /// Defaults now, persisted settings once [`poll_pending_load`](Self::poll_pending_load) sees them.
    pub fn initialize(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut store = Self::new(storage);
        let storage = Arc::clone(&store.storage);
        store.pending_load = Some(spawn_worker("theme-settings-load", move || {
            load_persisted(storage.as_ref())
        }));
        store
    }

    pub fn initialize_blocking(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut store = Self::new(storage);
        if let Some(loaded) = load_persisted(store.storage.as_ref()) {
            store.settings = loaded;
        }
        store
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Applies a finished background load. Returns true when settings changed.
    pub fn poll_pending_load(&mut self) -> bool {
        let Some(pending) = self.pending_load.as_ref() else {
            return false;
        };
        match pending.poll() {
            PollState::Ready(loaded) => {
                self.pending_load = None;
                self.apply_loaded(loaded)
            }
            PollState::Pending => false,
            PollState::Disconnected => {
                self.pending_load = None;
                false
            }
        }
    }

    /// Blocks until the background load, if any, has been applied.
    pub fn wait_for_pending_load(&mut self) -> bool {
        let Some(pending) = self.pending_load.take() else {
            return false;
        };
        let loaded = pending.wait().flatten();
        self.apply_loaded(loaded)
    }

    pub fn set_palette(&mut self, palette_id: impl Into<String>) {
        self.settings.palette_id = palette_id.into();
        tracing::debug!(palette_id = %self.settings.palette_id, "palette changed");
        self.persist();
    }

    pub fn set_accent(&mut self, accent_id: impl Into<String>) {
        self.settings.accent_id = accent_id.into();
        tracing::debug!(accent_id = %self.settings.accent_id, "accent changed");
        self.persist();
    }

    pub fn update_settings(&mut self, patch: &SettingsPatch) {
        self.settings = self.settings.merged_with(patch);
        tracing::debug!(settings = ?self.settings, "theme settings updated");
        self.persist();
    }

    /// Joins outstanding saves. Called on teardown so late changes still land.
    pub fn wait_for_pending_writes(&mut self) {
        if let Some(writer) = self.writer.take() {
            if !writer.finish() {
                tracing::warn!("theme settings writer panicked");
            }
        }
    }

    fn apply_loaded(&mut self, loaded: Option<ThemeSettings>) -> bool {
        let Some(loaded) = loaded else {
            return false;
        };
        tracing::info!(
            palette_id = %loaded.palette_id,
            accent_id = %loaded.accent_id,
            "restored persisted theme settings"
        );
        let changed = loaded != self.settings;
        self.settings = loaded;
        changed
    }

    fn persist(&mut self) {
        let mut snapshot = self.settings.clone();
        if let Some(writer) = self.writer.as_ref() {
            match writer.submit(snapshot) {
                Ok(()) => return,
                Err(rejected) => {
                    snapshot = rejected;
                    self.wait_for_pending_writes();
                }
            }
        }

        let storage = Arc::clone(&self.storage);
        let spawned = spawn_serial("theme-settings-save", move |settings: ThemeSettings| {
            save_or_warn(storage.as_ref(), &settings);
        });
        match spawned {
            Ok(writer) => match writer.submit(snapshot) {
                Ok(()) => self.writer = Some(writer),
                Err(rejected) => save_or_warn(self.storage.as_ref(), &rejected),
            },
            Err(err) => {
                tracing::warn!(?err, "failed to start theme settings writer; saving inline");
                save_or_warn(self.storage.as_ref(), &snapshot);
            }
        }
    }
}

impl Drop for ThemeStore {
    fn drop(&mut self) {
        self.wait_for_pending_writes();
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("settings", &self.settings)
            .field("loading", &self.pending_load.is_some())
            .field("writer_running", &self.writer.is_some())
            .finish()
    }
}

fn save_or_warn(storage: &dyn KeyValueStore, settings: &ThemeSettings) {
    if let Err(err) = write_persisted(storage, settings) {
        tracing::warn!(?err, "failed to save theme settings");
    }
}

/// Stored settings, or `None` when nothing usable is stored.
fn load_persisted(storage: &dyn KeyValueStore) -> Option<ThemeSettings> {
    match read_persisted(storage) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(?err, "failed to load theme settings; using defaults");
            None
        }
    }
}

pub(crate) fn read_persisted(storage: &dyn KeyValueStore) -> ThemeResult<Option<ThemeSettings>> {
    let Some(serialized) = storage.get_item(SETTINGS_STORAGE_KEY)? else {
        return Ok(None);
    };
    Ok(Some(ThemeSettings::from_json(&serialized)?))
}

pub(crate) fn write_persisted(
    storage: &dyn KeyValueStore,
    settings: &ThemeSettings,
) -> ThemeResult<()> {
    let serialized = settings.to_json()?;
    storage.set_item(SETTINGS_STORAGE_KEY, &serialized)?;
    Ok(())
}
