//! Tradedeck Accessibility
//!
//! WCAG 2.1 AA helpers for the dashboard:
//! - **Keyboard**: arrow, Home and End navigation over focusable lists
//! - **ARIA**: spoken labels for values, currency and percentages
//! - **Contrast**: relative luminance and contrast ratio checks
//! - **Palette**: colourblind-friendly hues
//!
//! ## Usage
//!
//! ```rust
//! use tradedeck_a11y::{Key, contrast_ratio, meets_wcag_aa, navigate};
//!
//! assert_eq!(navigate(Key::ArrowDown, 2, 3), Some(0));
//! assert!(meets_wcag_aa(contrast_ratio("#FFFFFF", "#000000"), false));
//! ```

pub mod aria;
pub mod contrast;
pub mod error;
pub mod keyboard;
pub mod palette;

pub use aria::{
    Priority, announce, aria_label, aria_label_currency, aria_label_percent, aria_live, format_usd,
};
pub use contrast::{
    Rgb, WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT, contrast_ratio, meets_wcag_aa,
    relative_luminance,
};
pub use error::{ColorError, UnknownKey};
pub use keyboard::{Key, navigate};
pub use palette::{PaletteColor, colorblind_palette, colorblind_rgb};
