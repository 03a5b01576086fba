// SPDX-License-Identifier: MPL-2.0
//! Smooth scrolling toward a target offset with exponential ease-out.

use crate::config::SMOOTH_SCROLL_SPEED;

/// Distance (px) under which the animation snaps to its target.
const SETTLE_DISTANCE: f32 = 0.5;

/// Offset animator used by the "scroll to gallery" action.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    current: f32,
    target: Option<f32>,
    speed: f32,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(SMOOTH_SCROLL_SPEED)
    }
}

impl SmoothScroll {
    #[must_use]
    pub fn new(speed: f32) -> Self {
        Self {
            current: 0.0,
            target: None,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Starts moving from `from` toward `to`.
    pub fn start(&mut self, from: f32, to: f32) {
        self.current = from;
        self.target = Some(to);
    }

    /// Abandons the animation, e.g. when the user scrolls manually.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// Advances one frame and returns the offset to apply, or `None` when idle.
    pub fn tick(&mut self) -> Option<f32> {
        let target = self.target?;
        self.current += (target - self.current) * self.speed;
        if (target - self.current).abs() < SETTLE_DISTANCE {
            self.current = target;
            self.target = None;
        }
        Some(self.current)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_animator_yields_nothing() {
        let mut scroll = SmoothScroll::default();
        assert_eq!(scroll.tick(), None);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut scroll = SmoothScroll::default();
        scroll.start(0.0, 900.0);

        let mut last = 0.0;
        let mut frames = 0;
        while let Some(offset) = scroll.tick() {
            assert!(offset >= last, "moved backwards");
            last = offset;
            frames += 1;
            assert!(frames < 500, "never settled");
        }
        assert_eq!(last, 900.0);
        assert!(frames > 1, "should animate over several frames");
    }

    #[test]
    fn scrolls_upward_too() {
        let mut scroll = SmoothScroll::default();
        scroll.start(1200.0, 300.0);
        let first = scroll.tick().expect("animating");
        assert!(first < 1200.0 && first > 300.0);
    }

    #[test]
    fn cancel_stops_animation() {
        let mut scroll = SmoothScroll::default();
        scroll.start(0.0, 100.0);
        scroll.cancel();
        assert_eq!(scroll.tick(), None);
    }
}
