use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use artisan_theme::config::AppConfig;
use artisan_theme::storage::{FileStore, KeyValueStore};
use artisan_theme::theme::{
    find_palette, SettingsPatch, ThemeSettings, HIGH_CONTRAST_BORDER, SETTINGS_STORAGE_KEY,
};
use artisan_theme::ThemeProvider;

fn fixture_root(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    let pid = std::process::id();
    path.push(format!("artisan-it-{label}-{pid}-{nanos}"));
    path
}

fn with_temp_root<F: FnOnce(&Path)>(label: &str, f: F) {
    let root = fixture_root(label);
    fs::create_dir_all(&root).unwrap();
    f(&root);
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn settings_survive_restart() {
    with_temp_root("restart", |root| {
        let storage = Arc::new(FileStore::new(root));
        let mut provider = ThemeProvider::new_blocking(storage.clone());
        provider.update_settings(&SettingsPatch {
            palette_id: Some("ocean".to_string()),
            accent_id: Some("ruby".to_string()),
            ..SettingsPatch::default()
        });
        provider.shutdown();

        let mut provider = ThemeProvider::new_blocking(storage.clone());
        provider.update_settings(&SettingsPatch {
            high_contrast: Some(true),
            ..SettingsPatch::default()
        });
        provider.shutdown();

        let mut restarted = ThemeProvider::new(storage);
        restarted.wait_until_loaded();
        let settings = restarted.settings();
        assert_eq!(settings.palette_id, "ocean");
        assert_eq!(settings.accent_id, "ruby");
        assert!(settings.high_contrast);

        let theme = restarted.theme();
        assert_eq!(
            theme.colors.primary,
            find_palette("ocean").unwrap().colors.primary
        );
        assert_eq!(theme.colors.accent, "#E0115F");
        assert_eq!(theme.colors.border, HIGH_CONTRAST_BORDER);
    });
}

#[test]
fn corrupt_blob_on_disk_starts_from_defaults() {
    with_temp_root("corrupt", |root| {
        let storage = FileStore::new(root);
        fs::write(storage.path_for_key(SETTINGS_STORAGE_KEY).unwrap(), "not json").unwrap();

        let mut provider = ThemeProvider::new(Arc::new(storage));
        assert!(!provider.wait_until_loaded());
        assert_eq!(provider.settings(), &ThemeSettings::default());
        assert_eq!(provider.theme().palette.id, "warm");
    });
}

#[test]
fn stale_palette_id_on_disk_falls_back_to_first_palette() {
    with_temp_root("stale", |root| {
        let storage = FileStore::new(root);
        storage
            .set_item(
                SETTINGS_STORAGE_KEY,
                r#"{"paletteId":"retired-palette","accentId":"gold","highContrast":false}"#,
            )
            .unwrap();

        let provider = ThemeProvider::new_blocking(Arc::new(storage));
        assert_eq!(provider.settings().palette_id, "retired-palette");
        assert!(provider.theme().palette_fallback);

        let warm = ThemeProvider::new_blocking(Arc::new(FileStore::new(root.join("empty"))));
        assert_eq!(provider.theme().colors, warm.theme().colors);
    });
}

#[test]
fn app_config_storage_dir_is_honored() {
    with_temp_root("config", |root| {
        let config = AppConfig::with_storage_dir(root.join("prefs"));
        let mut provider = ThemeProvider::from_app_config(&config);
        provider.set_palette("forest");
        provider.shutdown();

        let stored = fs::read_to_string(root.join("prefs").join("theme_settings.json")).unwrap();
        let settings = ThemeSettings::from_json(&stored).unwrap();
        assert_eq!(settings.palette_id, "forest");
    });
}

#[test]
fn rapid_mutations_persist_final_settings_after_shutdown() {
    with_temp_root("rapid", |root| {
        let storage = Arc::new(FileStore::new(root));
        let mut provider = ThemeProvider::new_blocking(storage.clone());
        provider.set_palette("sunset");
        provider.set_accent("sapphire");
        provider.update_settings(&SettingsPatch {
            reduced_motion: Some(true),
            bold_text: Some(true),
            ..SettingsPatch::default()
        });
        provider.set_palette("midnight");
        provider.set_accent("coral");
        let expected = provider.settings().clone();
        provider.shutdown();

        let reloaded = ThemeProvider::new_blocking(storage);
        assert_eq!(reloaded.settings(), &expected);
        assert_eq!(
            expected,
            ThemeSettings {
                palette_id: "midnight".to_string(),
                accent_id: "coral".to_string(),
                reduced_motion: true,
                bold_text: true,
                ..ThemeSettings::default()
            }
        );
    });
}
