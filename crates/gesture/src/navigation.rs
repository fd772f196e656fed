//! Swipe-driven navigation between dashboard sections

use log::debug;

use crate::config::GestureConfig;
use crate::touch::{SwipeDetector, SwipeDirection, SwipeEvent, TouchPoint};

/// Turns raw touch pairs into navigation swipes
///
/// A swipe only navigates when it is fast enough; slow drags are left to
/// the scroll container.
#[derive(Debug, Clone)]
pub struct SwipeNavigator {
    detector: SwipeDetector,
    min_velocity: f64,
}

impl SwipeNavigator {
    pub fn new(detector: SwipeDetector, min_velocity: f64) -> Self {
        Self {
            detector,
            min_velocity,
        }
    }

    pub fn from_config(config: &GestureConfig) -> Self {
        Self::new(
            SwipeDetector::from_config(config),
            config.min_swipe_velocity,
        )
    }

    /// Classify a touch pair, keeping only swipes at or above the minimum velocity
    pub fn on_touch_end(
        &self,
        start: TouchPoint,
        end: TouchPoint,
        elapsed_ms: f64,
    ) -> Option<SwipeEvent> {
        let swipe = self.detector.detect(start, end, elapsed_ms)?;

        if swipe.velocity < self.min_velocity {
            debug!(
                "Swipe too slow to navigate: velocity={:.3}, min={:.3}",
                swipe.velocity, self.min_velocity
            );
            return None;
        }

        Some(swipe)
    }
}

impl Default for SwipeNavigator {
    fn default() -> Self {
        Self::from_config(&GestureConfig::default())
    }
}

/// Horizontal pager over a fixed number of sections
///
/// Swiping left reveals the next section, swiping right the previous one.
/// The pager stops at both ends; vertical swipes never page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPager {
    sections: usize,
}

impl SectionPager {
    pub fn new(sections: usize) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> usize {
        self.sections
    }

    /// Index after a swipe, `None` if the swipe does not move the pager
    pub fn page(&self, current: usize, direction: SwipeDirection) -> Option<usize> {
        if self.sections == 0 || current >= self.sections {
            return None;
        }

        match direction {
            SwipeDirection::Left if current + 1 < self.sections => Some(current + 1),
            SwipeDirection::Right if current > 0 => Some(current - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slow_swipe_does_not_navigate() {
        let navigator = SwipeNavigator::default();
        let start = TouchPoint::new(300.0, 100.0, 0.0);
        let end = TouchPoint::new(100.0, 100.0, 0.0);

        // 200px in 1s = 0.2 px/ms
        assert!(navigator.on_touch_end(start, end, 1_000.0).is_none());

        // 200px in 200ms = 1.0 px/ms
        let swipe = navigator.on_touch_end(start, end, 200.0).unwrap();
        assert_eq!(swipe.direction, SwipeDirection::Left);
    }

    #[test]
    fn test_velocity_exactly_at_minimum_navigates() {
        let navigator = SwipeNavigator::default();
        let start = TouchPoint::new(0.0, 0.0, 0.0);
        let end = TouchPoint::new(100.0, 0.0, 0.0);

        assert!(navigator.on_touch_end(start, end, 200.0).is_some());
    }

    #[test]
    fn test_pager_moves_and_stops_at_ends() {
        let pager = SectionPager::new(3);

        assert_eq!(pager.page(0, SwipeDirection::Left), Some(1));
        assert_eq!(pager.page(1, SwipeDirection::Left), Some(2));
        assert_eq!(pager.page(2, SwipeDirection::Left), None);

        assert_eq!(pager.page(2, SwipeDirection::Right), Some(1));
        assert_eq!(pager.page(0, SwipeDirection::Right), None);
    }

    #[test]
    fn test_pager_ignores_vertical_and_empty() {
        let pager = SectionPager::new(3);
        assert_eq!(pager.page(1, SwipeDirection::Up), None);
        assert_eq!(pager.page(1, SwipeDirection::Down), None);

        assert_eq!(SectionPager::new(0).page(0, SwipeDirection::Left), None);
        assert_eq!(pager.page(7, SwipeDirection::Right), None);
    }
}
