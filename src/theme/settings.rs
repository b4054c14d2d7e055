use serde::{Deserialize, Serialize};

pub const DEFAULT_PALETTE_ID: &str = "warm";
pub const DEFAULT_ACCENT_ID: &str = "gold";

/// Persisted theme preferences.
///
/// Serialized as-is under a single storage key. There is no schema version:
/// missing fields fall back to their defaults and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSettings {
    pub palette_id: String,
    pub accent_id: String,
    pub auto_theme: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
    pub bold_text: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            palette_id: DEFAULT_PALETTE_ID.to_string(),
            accent_id: DEFAULT_ACCENT_ID.to_string(),
            auto_theme: false,
            high_contrast: false,
            reduced_motion: false,
            bold_text: false,
        }
    }
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default)]
    pub palette_id: Option<String>,
    #[serde(default)]
    pub accent_id: Option<String>,
    #[serde(default)]
    pub auto_theme: Option<bool>,
    #[serde(default)]
    pub high_contrast: Option<bool>,
    #[serde(default)]
    pub reduced_motion: Option<bool>,
    #[serde(default)]
    pub bold_text: Option<bool>,
}

impl ThemeSettings {
    pub fn merged_with(&self, patch: &SettingsPatch) -> ThemeSettings {
        ThemeSettings {
            palette_id: patch
                .palette_id
                .clone()
                .unwrap_or_else(|| self.palette_id.clone()),
            accent_id: patch
                .accent_id
                .clone()
                .unwrap_or_else(|| self.accent_id.clone()),
            auto_theme: patch.auto_theme.unwrap_or(self.auto_theme),
            high_contrast: patch.high_contrast.unwrap_or(self.high_contrast),
            reduced_motion: patch.reduced_motion.unwrap_or(self.reduced_motion),
            bold_text: patch.bold_text.unwrap_or(self.bold_text),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(serialized: &str) -> serde_json::Result<ThemeSettings> {
        serde_json::from_str(serialized)
    }
}
