//! WCAG 2.1 Contrast
//!
//! ```text
//! c' = c / 255
//! C  = c' / 12.92                      if c' <= 0.03928
//!      ((c' + 0.055) / 1.055) ^ 2.4    otherwise
//! L  = 0.2126 R + 0.7152 G + 0.0722 B
//! contrast = (L_light + 0.05) / (L_dark + 0.05)
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Minimum AA contrast for body text
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;

/// Minimum AA contrast for large text (18pt, or 14pt bold)
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;

/// 8-bit sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`, any case
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 {
            return Err(ColorError::InvalidLength(hex.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidDigit(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in [0, 1]
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    pub fn contrast_with(&self, other: &Rgb) -> f64 {
        ratio(self.relative_luminance(), other.relative_luminance())
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn ratio(a: f64, b: f64) -> f64 {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Relative luminance of a hex colour; 0 when it does not parse
pub fn relative_luminance(hex: &str) -> f64 {
    match Rgb::from_hex(hex) {
        Ok(rgb) => rgb.relative_luminance(),
        Err(e) => {
            warn!("Treating malformed colour as black: {}", e);
            0.0
        }
    }
}

/// Contrast ratio of two hex colours, from 1 to 21
pub fn contrast_ratio(hex1: &str, hex2: &str) -> f64 {
    ratio(relative_luminance(hex1), relative_luminance(hex2))
}

/// Returns true if `ratio` passes WCAG AA
pub fn meets_wcag_aa(ratio: f64, large_text: bool) -> bool {
    if large_text {
        ratio >= WCAG_AA_LARGE_TEXT
    } else {
        ratio >= WCAG_AA_NORMAL_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_on_white_is_maximum() {
        assert_eq!(contrast_ratio("#FFFFFF", "#000000"), 21.0);
        assert_eq!(contrast_ratio("#000000", "#FFFFFF"), 21.0);
    }

    #[test]
    fn test_same_colour_is_minimum() {
        assert_eq!(contrast_ratio("#457B9D", "#457b9d"), 1.0);
    }

    #[test]
    fn test_known_ratio() {
        // #767676 on white is the lightest grey that passes AA
        let ratio = contrast_ratio("#767676", "#FFFFFF");
        assert!((ratio - 4.54).abs() < 0.01);
        assert!(meets_wcag_aa(ratio, false));
    }

    #[test]
    fn test_malformed_colour_falls_back_to_black() {
        assert_eq!(relative_luminance("not-a-colour"), 0.0);
        assert_eq!(contrast_ratio("#FFF", "#FFFFFF"), 21.0);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#E63946"), Ok(Rgb::new(0xE6, 0x39, 0x46)));
        assert_eq!(Rgb::from_hex("2a9d8f"), Ok(Rgb::new(0x2A, 0x9D, 0x8F)));
        assert_eq!(
            Rgb::from_hex("#FFF"),
            Err(ColorError::InvalidLength("#FFF".to_string()))
        );
        assert_eq!(
            Rgb::from_hex("#GG0000"),
            Err(ColorError::InvalidDigit("#GG0000".to_string()))
        );
        assert!(Rgb::from_hex("#+10000").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(0x2a, 0x9d, 0x8f).to_hex(), "#2A9D8F");
    }

    #[test]
    fn test_wcag_thresholds() {
        assert!(meets_wcag_aa(4.5, false));
        assert!(!meets_wcag_aa(4.49, false));
        assert!(meets_wcag_aa(3.0, true));
        assert!(!meets_wcag_aa(2.99, true));
    }
}
