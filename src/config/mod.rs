use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const APP_DIR: &str = "artisan";
const APP_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("neither XDG_CONFIG_HOME nor HOME is set")]
    MissingHomeDirectory,
}

/// Optional overrides read from `<app dir>/config.json`.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    #[serde(default)]
    storage_dir: Option<PathBuf>,
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding persisted key-value entries.
    pub storage_dir: PathBuf,
}

impl AppConfig {
    pub fn with_storage_dir(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
        }
    }

    /// Resolves the app dir from the environment and applies `config.json`.
    pub fn load() -> Result<Self, ConfigError> {
        let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
        let home = std::env::var_os("HOME").map(PathBuf::from);
        Self::load_with(xdg_config_home.as_deref(), home.as_deref())
    }

    pub fn load_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Result<Self, ConfigError> {
        let app_dir = app_dir(xdg_config_home, home)?;
        let overrides = read_overrides(&app_dir.join(APP_CONFIG_FILE));
        let storage_dir = overrides
            .storage_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(app_dir);
        Ok(Self { storage_dir })
    }
}

/// `$XDG_CONFIG_HOME/artisan`, else `$HOME/.config/artisan`.
fn app_dir(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let root = match (xdg_config_home.filter(|dir| !dir.as_os_str().is_empty()), home) {
        (Some(xdg), _) => xdg.to_path_buf(),
        (None, Some(home)) => home.join(".config"),
        (None, None) => return Err(ConfigError::MissingHomeDirectory),
    };
    Ok(root.join(APP_DIR))
}

fn read_overrides(path: &Path) -> ConfigOverrides {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return ConfigOverrides::default(),
        Err(err) => {
            tracing::warn!(?err, path = %path.display(), "app config unreadable; ignoring it");
            return ConfigOverrides::default();
        }
    };
    serde_json::from_str(&contents).unwrap_or_else(|err| {
        tracing::warn!(?err, path = %path.display(), "app config is not valid JSON; ignoring it");
        ConfigOverrides::default()
    })
}
