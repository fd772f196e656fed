use serde::{Deserialize, Serialize};

/// Device orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Portrait only when strictly taller than wide
    pub fn of(width: f64, height: f64) -> Self {
        if height > width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// Returns true below the mobile breakpoint
pub fn is_mobile_viewport(width: f64, breakpoint: f64) -> bool {
    width < breakpoint
}

/// Safe-area insets of a notched device
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SafeAreaInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl SafeAreaInsets {
    /// Build insets from computed CSS custom property values such as `"44px"`
    ///
    /// Each value is read like `parseInt`: leading whitespace, optional sign,
    /// leading digits. Anything unreadable counts as 0.
    pub fn from_css(top: &str, right: &str, bottom: &str, left: &str) -> Self {
        Self {
            top: parse_css_px(top),
            right: parse_css_px(right),
            bottom: parse_css_px(bottom),
            left: parse_css_px(left),
        }
    }
}

fn parse_css_px(value: &str) -> f64 {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end]
        .parse::<f64>()
        .map(|n| sign * n)
        .unwrap_or(0.0)
}

/// Viewport size with the usable area inside the safe-area insets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportDimensions {
    pub width: f64,
    pub height: f64,
    pub safe_width: f64,
    pub safe_height: f64,
}

impl ViewportDimensions {
    pub fn new(width: f64, height: f64, insets: SafeAreaInsets) -> Self {
        Self {
            width,
            height,
            safe_width: width - insets.left - insets.right,
            safe_height: height - insets.top - insets.bottom,
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation() {
        assert_eq!(Orientation::of(390.0, 844.0), Orientation::Portrait);
        assert_eq!(Orientation::of(844.0, 390.0), Orientation::Landscape);
        // Square screens count as landscape
        assert_eq!(Orientation::of(500.0, 500.0), Orientation::Landscape);
    }

    #[test]
    fn test_mobile_breakpoint() {
        assert!(is_mobile_viewport(767.0, 768.0));
        assert!(!is_mobile_viewport(768.0, 768.0));
    }

    #[test]
    fn test_insets_from_css() {
        let insets = SafeAreaInsets::from_css("47px", "0", "", " 34px");
        assert_eq!(insets.top, 47.0);
        assert_eq!(insets.right, 0.0);
        assert_eq!(insets.bottom, 0.0);
        assert_eq!(insets.left, 34.0);

        let odd = SafeAreaInsets::from_css("env(x)", "-3px", "12.9px", "abc");
        assert_eq!(odd.top, 0.0);
        assert_eq!(odd.right, -3.0);
        assert_eq!(odd.bottom, 12.0);
        assert_eq!(odd.left, 0.0);
    }

    #[test]
    fn test_insets_with_long_digit_runs() {
        let insets =
            SafeAreaInsets::from_css("12345678901234px", "-99999999999px", "4294967296", "+7px");
        assert_eq!(insets.top, 12_345_678_901_234.0);
        assert_eq!(insets.right, -99_999_999_999.0);
        assert_eq!(insets.bottom, 4_294_967_296.0);
        assert_eq!(insets.left, 7.0);
    }

    #[test]
    fn test_safe_dimensions() {
        let insets = SafeAreaInsets {
            top: 47.0,
            right: 0.0,
            bottom: 34.0,
            left: 0.0,
        };
        let viewport = ViewportDimensions::new(390.0, 844.0, insets);

        assert_eq!(viewport.safe_width, 390.0);
        assert_eq!(viewport.safe_height, 763.0);
        assert_eq!(viewport.orientation(), Orientation::Portrait);
    }
}
