use serde::{Deserialize, Serialize};

use crate::contrast::Rgb;

/// Hue families of the colourblind-friendly palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Yellow,
        PaletteColor::Purple,
        PaletteColor::Orange,
    ];
}

/// Hex colour distinguishable under common colour-vision deficiencies
pub fn colorblind_palette(color: PaletteColor) -> &'static str {
    match color {
        PaletteColor::Red => "#E63946",
        // Teal rather than pure green
        PaletteColor::Green => "#2A9D8F",
        PaletteColor::Blue => "#457B9D",
        PaletteColor::Yellow => "#F4A261",
        PaletteColor::Purple => "#9D4EDD",
        PaletteColor::Orange => "#FB8500",
    }
}

/// Palette colour as RGB
pub fn colorblind_rgb(color: PaletteColor) -> Rgb {
    // Palette entries are well-formed constants
    Rgb::from_hex(colorblind_palette(color)).unwrap_or(Rgb::new(0, 0, 0))
}
