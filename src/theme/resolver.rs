use serde::Serialize;

use super::catalog::{find_accent, find_palette, Accent, Palette, PaletteColors, ACCENTS, PALETTES};
use super::settings::ThemeSettings;
use crate::ui::style::{motion_tokens_for, FontWeight, MotionTokens};

pub const HIGH_CONTRAST_TEXT: &str = "#000000";
pub const HIGH_CONTRAST_TEXT_SECONDARY: &str = "#333333";
pub const HIGH_CONTRAST_BORDER: &str = "#000000";

/// Theme derived from settings; recomputed on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub colors: PaletteColors,
    #[serde(skip)]
    pub palette: &'static Palette,
    #[serde(skip)]
    pub accent: &'static Accent,
    pub gradient: [&'static str; 3],
    pub preview: &'static str,
    pub settings: ThemeSettings,
    /// The stored palette id matched nothing and the first palette was used.
    pub palette_fallback: bool,
    /// The stored accent id matched nothing and the first accent was used.
    pub accent_fallback: bool,
}

impl ResolvedTheme {
    pub fn motion(&self) -> MotionTokens {
        motion_tokens_for(self.settings.reduced_motion)
    }

    pub fn font_weight(&self) -> FontWeight {
        FontWeight::for_bold_text(self.settings.bold_text)
    }
}

/// Default-on-miss: unknown palette ids resolve to the first catalog entry.
pub fn palette_or_default(id: &str) -> (&'static Palette, bool) {
    match find_palette(id) {
        Some(palette) => (palette, false),
        None => (&PALETTES[0], true),
    }
}

/// Default-on-miss: unknown accent ids resolve to the first catalog entry.
pub fn accent_or_default(id: &str) -> (&'static Accent, bool) {
    match find_accent(id) {
        Some(accent) => (accent, false),
        None => (&ACCENTS[0], true),
    }
}

/// Resolve palette colors for settings: accent overlay, then high-contrast triad.
pub fn resolve_colors(settings: &ThemeSettings) -> PaletteColors {
    let (palette, _) = palette_or_default(&settings.palette_id);
    let (accent, _) = accent_or_default(&settings.accent_id);
    overlay(palette, accent, settings.high_contrast)
}

pub fn resolve_theme(settings: &ThemeSettings) -> ResolvedTheme {
    let (palette, palette_fallback) = palette_or_default(&settings.palette_id);
    let (accent, accent_fallback) = accent_or_default(&settings.accent_id);
    if palette_fallback || accent_fallback {
        tracing::debug!(
            palette_id = %settings.palette_id,
            accent_id = %settings.accent_id,
            palette_fallback,
            accent_fallback,
            "theme id not in catalog; using first entry"
        );
    }

    ResolvedTheme {
        colors: overlay(palette, accent, settings.high_contrast),
        palette,
        accent,
        gradient: palette.gradient,
        preview: palette.preview,
        settings: settings.clone(),
        palette_fallback,
        accent_fallback,
    }
}

fn overlay(palette: &Palette, accent: &Accent, high_contrast: bool) -> PaletteColors {
    let mut colors = PaletteColors {
        accent: accent.color,
        ..palette.colors
    };
    if high_contrast {
        colors.text = HIGH_CONTRAST_TEXT;
        colors.text_secondary = HIGH_CONTRAST_TEXT_SECONDARY;
        colors.border = HIGH_CONTRAST_BORDER;
    }
    colors
}
