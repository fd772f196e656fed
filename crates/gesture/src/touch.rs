//! Swipe and pinch classification
//!
//! Coordinates follow the screen convention: `x` grows to the right, `y`
//! grows downwards. Times are milliseconds.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::{GestureConfig, VelocityPolicy};

/// Minimum travel distance for a swipe
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// A single touch sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub time: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64, time: f64) -> Self {
        Self { x, y, time }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &TouchPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Direction of a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, SwipeDirection::Left | SwipeDirection::Right)
    }
}

/// A classified swipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeEvent {
    pub direction: SwipeDirection,
    pub distance: f64,
    /// Pixels per millisecond
    pub velocity: f64,
    /// Start of the swipe, `time` reset to 0
    pub start_point: TouchPoint,
    /// End of the swipe, `time` is the elapsed duration
    pub end_point: TouchPoint,
}

/// Two-finger measurement
///
/// `scale` is the raw inter-finger distance, not a ratio. Keep the first
/// event of a gesture and use [`PinchEvent::zoom_relative_to`] for a factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchEvent {
    pub scale: f64,
    pub distance: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl PinchEvent {
    /// Zoom factor against a baseline pinch; 1.0 for a zero baseline
    pub fn zoom_relative_to(&self, baseline: &PinchEvent) -> f64 {
        if baseline.distance > 0.0 {
            self.distance / baseline.distance
        } else {
            1.0
        }
    }
}

/// Per-axis velocity in pixels per millisecond
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchVelocity {
    pub x: f64,
    pub y: f64,
}

/// Swipe classifier with a configurable threshold and zero-time policy
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold: f64,
    velocity_policy: VelocityPolicy,
}

impl SwipeDetector {
    pub fn new(threshold: f64, velocity_policy: VelocityPolicy) -> Self {
        Self {
            threshold,
            velocity_policy,
        }
    }

    pub fn from_config(config: &GestureConfig) -> Self {
        Self::new(config.swipe_threshold, config.velocity_policy)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classify a touch start/end pair
    ///
    /// Returns `None` when the travel is below the threshold, or when the
    /// elapsed time is not positive and the policy is `Reject`.
    pub fn detect(
        &self,
        start: TouchPoint,
        end: TouchPoint,
        elapsed_ms: f64,
    ) -> Option<SwipeEvent> {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < self.threshold {
            return None;
        }

        let velocity = self.velocity(distance, elapsed_ms)?;

        // Ties go horizontal
        let direction = if dx.abs() >= dy.abs() {
            if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        } else if dy > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        };

        debug!(
            "Swipe detected: direction={:?}, distance={:.1}, velocity={:.3}",
            direction, distance, velocity
        );

        Some(SwipeEvent {
            direction,
            distance,
            velocity,
            start_point: TouchPoint::new(start.x, start.y, 0.0),
            end_point: TouchPoint::new(end.x, end.y, elapsed_ms),
        })
    }

    fn velocity(&self, distance: f64, elapsed_ms: f64) -> Option<f64> {
        if elapsed_ms > 0.0 {
            return Some(distance / elapsed_ms);
        }

        warn!("Non-positive swipe duration: {} ms", elapsed_ms);
        match self.velocity_policy {
            VelocityPolicy::Infinite => Some(f64::INFINITY),
            VelocityPolicy::Clamp { min_elapsed_ms } => {
                Some(distance / min_elapsed_ms.max(f64::MIN_POSITIVE))
            }
            VelocityPolicy::Reject => None,
        }
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD, VelocityPolicy::default())
    }
}

/// Classify a swipe with the default threshold and velocity policy
pub fn detect_swipe(start: TouchPoint, end: TouchPoint, elapsed_ms: f64) -> Option<SwipeEvent> {
    SwipeDetector::default().detect(start, end, elapsed_ms)
}

/// Measure a two-finger touch
pub fn calculate_pinch_scale(a: TouchPoint, b: TouchPoint) -> PinchEvent {
    let distance = a.distance_to(&b);

    PinchEvent {
        scale: distance,
        distance,
        center_x: (a.x + b.x) / 2.0,
        center_y: (a.y + b.y) / 2.0,
    }
}

/// Returns true once a touch has been held strictly longer than `threshold_ms`
pub fn is_long_press(start_ms: f64, now_ms: f64, threshold_ms: f64) -> bool {
    now_ms - start_ms > threshold_ms
}

/// Per-axis velocity between two samples, for momentum scrolling
///
/// The elapsed time is floored at 1 ms.
pub fn touch_velocity(start: TouchPoint, end: TouchPoint) -> TouchVelocity {
    let elapsed = (end.time - start.time).max(1.0);

    TouchVelocity {
        x: (end.x - start.x) / elapsed,
        y: (end.y - start.y) / elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> TouchPoint {
        TouchPoint::new(x, y, 0.0)
    }

    #[test]
    fn test_short_travel_is_not_a_swipe() {
        // 30-40-50 triangle scaled below threshold: 49.99
        let end = point(29.994, 39.992);
        assert!(end.distance_to(&point(0.0, 0.0)) < SWIPE_THRESHOLD);
        assert!(detect_swipe(point(0.0, 0.0), end, 100.0).is_none());

        for d in [0.0, 1.0, 25.0, 49.0, 49.999] {
            assert!(detect_swipe(point(100.0, 100.0), point(100.0 + d, 100.0), 100.0).is_none());
            assert!(detect_swipe(point(100.0, 100.0), point(100.0, 100.0 - d), 100.0).is_none());
        }
    }

    #[test]
    fn test_threshold_distance_is_a_swipe() {
        let swipe = detect_swipe(point(0.0, 0.0), point(30.0, 40.0), 100.0).unwrap();
        assert_eq!(swipe.distance, 50.0);
        assert_eq!(swipe.velocity, 0.5);
    }

    #[test]
    fn test_direction_by_dominant_axis() {
        let origin = point(200.0, 200.0);

        let right = detect_swipe(origin, point(300.0, 220.0), 100.0).unwrap();
        assert_eq!(right.direction, SwipeDirection::Right);

        let left = detect_swipe(origin, point(100.0, 180.0), 100.0).unwrap();
        assert_eq!(left.direction, SwipeDirection::Left);

        let down = detect_swipe(origin, point(210.0, 300.0), 100.0).unwrap();
        assert_eq!(down.direction, SwipeDirection::Down);

        let up = detect_swipe(origin, point(190.0, 100.0), 100.0).unwrap();
        assert_eq!(up.direction, SwipeDirection::Up);
    }

    #[test]
    fn test_diagonal_tie_resolves_horizontal() {
        let origin = point(200.0, 200.0);

        for (dx, dy) in [(60.0, 60.0), (-60.0, 60.0), (60.0, -60.0), (-60.0, -60.0)] {
            let swipe = detect_swipe(origin, point(200.0 + dx, 200.0 + dy), 100.0).unwrap();
            assert!(swipe.direction.is_horizontal());
            let expected = if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            };
            assert_eq!(swipe.direction, expected);
        }
    }

    #[test]
    fn test_swipe_points_carry_elapsed_time() {
        let start = TouchPoint::new(0.0, 0.0, 1_000.0);
        let end = TouchPoint::new(100.0, 0.0, 1_250.0);

        let swipe = detect_swipe(start, end, 250.0).unwrap();
        assert_eq!(swipe.start_point.time, 0.0);
        assert_eq!(swipe.end_point.time, 250.0);
        assert_eq!(swipe.velocity, 0.4);
    }

    #[test]
    fn test_zero_elapsed_policies() {
        let start = point(0.0, 0.0);
        let end = point(100.0, 0.0);

        let infinite = SwipeDetector::new(SWIPE_THRESHOLD, VelocityPolicy::Infinite);
        let swipe = infinite.detect(start, end, 0.0).unwrap();
        assert!(swipe.velocity.is_infinite());

        let clamp = SwipeDetector::new(
            SWIPE_THRESHOLD,
            VelocityPolicy::Clamp {
                min_elapsed_ms: 16.0,
            },
        );
        let swipe = clamp.detect(start, end, 0.0).unwrap();
        assert_eq!(swipe.velocity, 6.25);

        let reject = SwipeDetector::new(SWIPE_THRESHOLD, VelocityPolicy::Reject);
        assert!(reject.detect(start, end, 0.0).is_none());
        assert!(reject.detect(start, end, -5.0).is_none());
        assert!(reject.detect(start, end, 10.0).is_some());
    }

    #[test]
    fn test_pinch_scale_is_raw_distance() {
        let pinch = calculate_pinch_scale(point(0.0, 0.0), point(60.0, 80.0));

        assert_eq!(pinch.distance, 100.0);
        assert_eq!(pinch.scale, pinch.distance);
        assert_eq!(pinch.center_x, 30.0);
        assert_eq!(pinch.center_y, 40.0);
    }

    #[test]
    fn test_pinch_zoom_relative_to_baseline() {
        let baseline = calculate_pinch_scale(point(0.0, 0.0), point(100.0, 0.0));
        let spread = calculate_pinch_scale(point(0.0, 0.0), point(150.0, 0.0));
        assert_eq!(spread.zoom_relative_to(&baseline), 1.5);

        let collapsed = calculate_pinch_scale(point(5.0, 5.0), point(5.0, 5.0));
        assert_eq!(spread.zoom_relative_to(&collapsed), 1.0);
    }

    #[test]
    fn test_long_press() {
        assert!(!is_long_press(1_000.0, 1_500.0, 500.0));
        assert!(is_long_press(1_000.0, 1_501.0, 500.0));
    }

    #[test]
    fn test_touch_velocity_floors_elapsed() {
        let start = TouchPoint::new(0.0, 0.0, 100.0);
        let end = TouchPoint::new(50.0, -20.0, 100.0);

        let v = touch_velocity(start, end);
        assert_eq!(v.x, 50.0);
        assert_eq!(v.y, -20.0);

        let later = TouchPoint::new(50.0, -20.0, 110.0);
        let v = touch_velocity(start, later);
        assert_eq!(v.x, 5.0);
        assert_eq!(v.y, -2.0);
    }
}
