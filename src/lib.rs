pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod ui;
mod worker;

pub use app::ThemeProvider;
pub use error::{AppError, AppResult};

/// Loads the persisted theme, applies optional palette/accent selections and
/// returns the resolved color map as JSON.
pub fn run(palette_id: Option<&str>, accent_id: Option<&str>) -> AppResult<String> {
    logging::init();
    tracing::info!("starting artisan theme");

    let app_config = config::AppConfig::load()?;
    let mut provider = ThemeProvider::from_app_config(&app_config);

    if let Some(palette_id) = palette_id {
        provider.set_palette(palette_id);
    }
    if let Some(accent_id) = accent_id {
        provider.set_accent(accent_id);
    }

    let resolved = provider.theme();
    tracing::info!(
        palette = resolved.palette.id,
        accent = resolved.accent.id,
        palette_fallback = resolved.palette_fallback,
        accent_fallback = resolved.accent_fallback,
        high_contrast = resolved.settings.high_contrast,
        "resolved theme"
    );
    if resolved.palette_fallback {
        let known: Vec<_> = theme::palette_ids().collect();
        tracing::warn!(
            palette_id = %resolved.settings.palette_id,
            ?known,
            "unknown palette id; showing the default palette"
        );
    }
    if resolved.accent_fallback {
        let known: Vec<_> = theme::accent_ids().collect();
        tracing::warn!(
            accent_id = %resolved.settings.accent_id,
            ?known,
            "unknown accent id; showing the default accent"
        );
    }
    let colors = provider.colors_json()?;
    provider.shutdown();
    Ok(colors)
}
