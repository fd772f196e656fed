//! Tradedeck Gestures
//!
//! Classifies raw touch input from the mobile dashboard:
//!
//! - **Swipes**: a start/end touch pair becomes a direction, distance and
//!   velocity, or nothing when the finger moved less than the threshold
//! - **Pinches**: two touches become an inter-finger distance and centre
//! - **Navigation**: velocity-filtered swipes drive section paging
//! - **Viewport**: orientation, safe-area insets and mobile breakpoints
//!
//! Every function here is pure. Callers keep whatever touch state they need
//! between events (for pinches, the baseline distance).
//!
//! ## Usage
//!
//! ```rust
//! use tradedeck_gesture::{SwipeDirection, TouchPoint, detect_swipe};
//!
//! let start = TouchPoint::new(10.0, 200.0, 0.0);
//! let end = TouchPoint::new(160.0, 210.0, 0.0);
//!
//! let swipe = detect_swipe(start, end, 120.0).unwrap();
//! assert_eq!(swipe.direction, SwipeDirection::Right);
//! ```

pub mod config;
pub mod navigation;
pub mod touch;
pub mod viewport;

// Re-export main types
pub use config::{GestureConfig, VelocityPolicy};
pub use navigation::{SectionPager, SwipeNavigator};
pub use touch::{
    PinchEvent, SWIPE_THRESHOLD, SwipeDetector, SwipeDirection, SwipeEvent, TouchPoint,
    TouchVelocity, calculate_pinch_scale, detect_swipe, is_long_press, touch_velocity,
};
pub use viewport::{Orientation, SafeAreaInsets, ViewportDimensions, is_mobile_viewport};
