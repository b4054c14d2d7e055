//! Build-time palette and accent lists.
//!
//! Order matters: index 0 of each list is the fallback the resolver uses when a
//! stored id no longer matches anything.

use serde::Serialize;

/// The full color field set every palette carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub surface_variant: &'static str,
}

impl PaletteColors {
    /// Field name and value pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, &'static str); 14] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("surface", self.surface),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("border", self.border),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("primaryLight", self.primary_light),
            ("primaryDark", self.primary_dark),
            ("surfaceVariant", self.surface_variant),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: PaletteColors,
    pub gradient: [&'static str; 3],
    pub preview: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accent {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub static PALETTES: &[Palette] = &[
    Palette {
        id: "warm",
        name: "Warm Earth",
        description: "Terracotta and sand tones inspired by clay workshops",
        colors: PaletteColors {
            primary: "#C1440E",
            secondary: "#8B5E3C",
            accent: "#E9A23B",
            background: "#FFF8F0",
            surface: "#FFFFFF",
            text: "#2D1B0E",
            text_secondary: "#7A5C45",
            border: "#E8D5C4",
            success: "#4CAF50",
            warning: "#FF9800",
            error: "#D32F2F",
            primary_light: "#E8794A",
            primary_dark: "#8A2F08",
            surface_variant: "#F5E6D8",
        },
        gradient: ["#C1440E", "#E9A23B", "#F5E6D8"],
        preview: "#C1440E",
    },
    Palette {
        id: "ocean",
        name: "Ocean Breeze",
        description: "Cool blues and teals for a calm, airy feel",
        colors: PaletteColors {
            primary: "#0077B6",
            secondary: "#00B4D8",
            accent: "#90E0EF",
            background: "#F0F9FF",
            surface: "#FFFFFF",
            text: "#03045E",
            text_secondary: "#4A6FA5",
            border: "#CAF0F8",
            success: "#2A9D8F",
            warning: "#F4A261",
            error: "#E63946",
            primary_light: "#48A9E0",
            primary_dark: "#023E8A",
            surface_variant: "#E0F4FC",
        },
        gradient: ["#03045E", "#0077B6", "#00B4D8"],
        preview: "#0077B6",
    },
    Palette {
        id: "forest",
        name: "Forest Workshop",
        description: "Deep greens and timber browns from the woodshop",
        colors: PaletteColors {
            primary: "#2D6A4F",
            secondary: "#40916C",
            accent: "#95D5B2",
            background: "#F4FAF6",
            surface: "#FFFFFF",
            text: "#1B2E23",
            text_secondary: "#52796F",
            border: "#D8F3DC",
            success: "#52B788",
            warning: "#E9C46A",
            error: "#BC4749",
            primary_light: "#74C69D",
            primary_dark: "#1B4332",
            surface_variant: "#E9F5EC",
        },
        gradient: ["#1B4332", "#2D6A4F", "#74C69D"],
        preview: "#2D6A4F",
    },
    Palette {
        id: "sunset",
        name: "Sunset Market",
        description: "Vivid oranges and magentas of an evening bazaar",
        colors: PaletteColors {
            primary: "#F3722C",
            secondary: "#F94144",
            accent: "#F9C74F",
            background: "#FFF6F0",
            surface: "#FFFFFF",
            text: "#3A1F12",
            text_secondary: "#8C5A45",
            border: "#FAD7C3",
            success: "#43AA8B",
            warning: "#F8961E",
            error: "#C9184A",
            primary_light: "#F79D65",
            primary_dark: "#B34D15",
            surface_variant: "#FDEADF",
        },
        gradient: ["#F94144", "#F3722C", "#F9C74F"],
        preview: "#F3722C",
    },
    Palette {
        id: "midnight",
        name: "Midnight Studio",
        description: "A dark palette for late-night browsing",
        colors: PaletteColors {
            primary: "#7B8CDE",
            secondary: "#5C6BC0",
            accent: "#FFD166",
            background: "#0F1123",
            surface: "#1A1D3A",
            text: "#E8EAF6",
            text_secondary: "#9FA8DA",
            border: "#2C3163",
            success: "#66BB6A",
            warning: "#FFA726",
            error: "#EF5350",
            primary_light: "#A5B1F0",
            primary_dark: "#4A5AA8",
            surface_variant: "#252A52",
        },
        gradient: ["#0F1123", "#1A1D3A", "#7B8CDE"],
        preview: "#1A1D3A",
    },
    Palette {
        id: "lavender",
        name: "Lavender Loom",
        description: "Soft purples drawn from hand-dyed textiles",
        colors: PaletteColors {
            primary: "#7B2CBF",
            secondary: "#9D4EDD",
            accent: "#E0AAFF",
            background: "#FAF5FF",
            surface: "#FFFFFF",
            text: "#240046",
            text_secondary: "#6A4C93",
            border: "#EBD9FC",
            success: "#4CAF50",
            warning: "#FFB703",
            error: "#D90429",
            primary_light: "#C77DFF",
            primary_dark: "#5A189A",
            surface_variant: "#F3E8FF",
        },
        gradient: ["#5A189A", "#9D4EDD", "#E0AAFF"],
        preview: "#9D4EDD",
    },
];

pub static ACCENTS: &[Accent] = &[
    Accent {
        id: "gold",
        name: "Gold",
        color: "#D4AF37",
        description: "Warm metallic highlight",
    },
    Accent {
        id: "ruby",
        name: "Ruby",
        color: "#E0115F",
        description: "Bold jewel red",
    },
    Accent {
        id: "emerald",
        name: "Emerald",
        color: "#50C878",
        description: "Fresh gemstone green",
    },
    Accent {
        id: "sapphire",
        name: "Sapphire",
        color: "#0F52BA",
        description: "Deep royal blue",
    },
    Accent {
        id: "amethyst",
        name: "Amethyst",
        color: "#9966CC",
        description: "Muted violet",
    },
    Accent {
        id: "coral",
        name: "Coral",
        color: "#FF7F50",
        description: "Playful reef orange",
    },
];

pub fn find_palette(id: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|palette| palette.id == id)
}

pub fn find_accent(id: &str) -> Option<&'static Accent> {
    ACCENTS.iter().find(|accent| accent.id == id)
}

pub fn palette_ids() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|palette| palette.id)
}

pub fn accent_ids() -> impl Iterator<Item = &'static str> {
    ACCENTS.iter().map(|accent| accent.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn palette_ids_are_unique() {
        let ids: HashSet<_> = palette_ids().collect();
        assert_eq!(ids.len(), PALETTES.len());
    }

    #[test]
    fn accent_ids_are_unique() {
        let ids: HashSet<_> = accent_ids().collect();
        assert_eq!(ids.len(), ACCENTS.len());
    }

    #[test]
    fn catalog_leads_with_default_entries() {
        assert_eq!(PALETTES[0].id, "warm");
        assert_eq!(ACCENTS[0].id, "gold");
    }

    #[test]
    fn find_returns_none_for_unknown_ids() {
        assert!(find_palette("unknown-id").is_none());
        assert!(find_accent("unknown-id").is_none());
        assert_eq!(find_accent("ruby").map(|a| a.color), Some("#E0115F"));
    }

    #[test]
    fn every_palette_color_is_hex() {
        let is_hex = |value: &str| {
            value.len() == 7
                && value.starts_with('#')
                && value[1..].chars().all(|ch| ch.is_ascii_hexdigit())
        };
        for palette in PALETTES {
            for (field, value) in palette.colors.entries() {
                assert!(is_hex(value), "{}.{field} has bad color {value}", palette.id);
            }
            assert!(palette.gradient.iter().all(|stop| is_hex(stop)));
            assert!(is_hex(palette.preview));
        }
        for accent in ACCENTS {
            assert!(is_hex(accent.color), "{} has bad color", accent.id);
        }
    }
}
