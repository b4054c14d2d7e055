pub mod catalog;
pub mod resolver;
pub mod settings;
pub mod store;

use thiserror::Error;

use crate::storage::StorageError;

pub use catalog::{
    accent_ids, find_accent, find_palette, palette_ids, Accent, Palette, PaletteColors, ACCENTS,
    PALETTES,
};
pub use resolver::{
    accent_or_default, palette_or_default, resolve_colors, resolve_theme, ResolvedTheme,
    HIGH_CONTRAST_BORDER, HIGH_CONTRAST_TEXT, HIGH_CONTRAST_TEXT_SECONDARY,
};
pub use settings::{SettingsPatch, ThemeSettings, DEFAULT_ACCENT_ID, DEFAULT_PALETTE_ID};
pub use store::{ThemeStore, SETTINGS_STORAGE_KEY};

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme settings storage failed")]
    Storage(#[from] StorageError),
    #[error("failed to (de)serialize theme settings")]
    Serialization(#[from] serde_json::Error),
}
