// SPDX-License-Identifier: MPL-2.0
//! Pointer follower with damped interpolation.
//!
//! Two markers track the pointer: an instant one that sits exactly on the
//! last reported position, and a lazy one that closes a fixed fraction of
//! the remaining gap on every animation frame. The frame loop is idle-driven:
//! once activated it keeps requesting frames until deactivated, even while
//! the pointer is stationary.

use crate::config::{DEFAULT_DAMPING, MAX_DAMPING, MIN_DAMPING};
use iced::{Point, Size};

/// Fraction of the remaining gap closed per frame, kept within
/// `MIN_DAMPING..=MAX_DAMPING`.
///
/// # Example
///
/// ```
/// use artefact::ui::state::Damping;
///
/// assert_eq!(Damping::default().value(), 0.08);
/// assert_eq!(Damping::new(3.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damping(f32);

impl Damping {
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_DAMPING, MAX_DAMPING))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Damping {
    fn default() -> Self {
        Self(DEFAULT_DAMPING)
    }
}

/// Raw and eased pointer coordinates in viewport space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub raw: Point,
    pub eased: Point,
}

impl PointerSample {
    /// Both positions seeded at the center of `viewport`.
    #[must_use]
    pub fn centered(viewport: Size) -> Self {
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        Self {
            raw: center,
            eased: center,
        }
    }

    /// Euclidean distance between the eased and raw positions.
    #[must_use]
    pub fn gap(&self) -> f32 {
        self.raw.distance(self.eased)
    }

    fn step(&mut self, damping: Damping) {
        let k = damping.value();
        self.eased.x += (self.raw.x - self.eased.x) * k;
        self.eased.y += (self.raw.y - self.eased.y) * k;
    }
}

/// Owns the single pending-frame flag of a self-rescheduling loop.
///
/// `start` is idempotent, so re-activation never queues a second frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameScheduler {
    running: bool,
    pending: bool,
}

impl FrameScheduler {
    /// Starts the loop and queues the first frame. Returns `false` if it was
    /// already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.pending = true;
        true
    }

    /// Stops the loop and drops any queued frame.
    pub fn stop(&mut self) {
        self.running = false;
        self.pending = false;
    }

    /// Consumes the queued frame, if any.
    pub fn take_frame(&mut self) -> bool {
        if self.running && self.pending {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Queues the next frame while running.
    pub fn request_frame(&mut self) {
        if self.running {
            self.pending = true;
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.pending
    }
}

/// Damped pointer follower.
#[derive(Debug, Clone)]
pub struct PointerFollowAnimator {
    sample: PointerSample,
    damping: Damping,
    scheduler: FrameScheduler,
}

impl PointerFollowAnimator {
    /// Creates an inactive animator seeded at the center of `viewport`.
    #[must_use]
    pub fn new(viewport: Size, damping: Damping) -> Self {
        Self {
            sample: PointerSample::centered(viewport),
            damping,
            scheduler: FrameScheduler::default(),
        }
    }

    /// Seeds both positions at the viewport center and starts the frame loop.
    ///
    /// Calling it while already active keeps the current positions.
    pub fn activate(&mut self, viewport: Size) {
        if self.scheduler.start() {
            self.sample = PointerSample::centered(viewport);
            tracing::debug!(x = self.sample.raw.x, y = self.sample.raw.y, "pointer follower activated");
        }
    }

    /// Stops the frame loop. Later pointer moves and frames are ignored.
    pub fn deactivate(&mut self) {
        if self.scheduler.is_running() {
            self.scheduler.stop();
            tracing::debug!("pointer follower deactivated");
        }
    }

    /// Records the latest pointer position without smoothing.
    pub fn on_pointer_move(&mut self, position: Point) {
        if self.scheduler.is_running() {
            self.sample.raw = position;
        }
    }

    /// Runs one animation step if a frame is queued, then queues the next.
    ///
    /// Returns whether a step ran.
    pub fn on_frame(&mut self) -> bool {
        if !self.scheduler.take_frame() {
            return false;
        }
        self.sample.step(self.damping);
        self.scheduler.request_frame();
        true
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Marker drawn exactly at the pointer.
    #[must_use]
    pub fn instant_marker(&self) -> Point {
        self.sample.raw
    }

    /// Marker trailing the pointer.
    #[must_use]
    pub fn lazy_marker(&self) -> Point {
        self.sample.eased
    }

    #[must_use]
    pub fn sample(&self) -> PointerSample {
        self.sample
    }

    #[must_use]
    pub fn damping(&self) -> Damping {
        self.damping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 1280.0,
        height: 720.0,
    };

    fn active_animator() -> PointerFollowAnimator {
        let mut animator = PointerFollowAnimator::new(VIEWPORT, Damping::default());
        animator.activate(VIEWPORT);
        animator
    }

    #[test]
    fn activation_seeds_viewport_center() {
        let animator = active_animator();
        assert_eq!(animator.instant_marker(), Point::new(640.0, 360.0));
        assert_eq!(animator.lazy_marker(), Point::new(640.0, 360.0));
    }

    #[test]
    fn single_step_matches_damped_formula() {
        let mut animator = active_animator();
        animator.on_pointer_move(Point::new(500.0, 500.0));

        assert!(animator.on_frame());

        let eased = animator.lazy_marker();
        assert!((eased.x - 628.8).abs() < 1e-3);
        assert!((eased.y - 371.2).abs() < 1e-3);
        assert_eq!(animator.instant_marker(), Point::new(500.0, 500.0));
    }

    #[test]
    fn gap_strictly_decreases_until_converged() {
        let mut animator = active_animator();
        animator.on_pointer_move(Point::new(100.0, 50.0));

        let mut previous = animator.sample().gap();
        for _ in 0..400 {
            animator.on_frame();
            let gap = animator.sample().gap();
            if previous < 1e-3 {
                break;
            }
            assert!(gap < previous, "gap grew from {previous} to {gap}");
            previous = gap;
        }
        assert!(animator.sample().gap() < 1e-2);
    }

    #[test]
    fn loop_keeps_running_while_pointer_is_still() {
        let mut animator = active_animator();
        for _ in 0..10 {
            assert!(animator.on_frame());
        }
        assert_eq!(animator.lazy_marker(), Point::new(640.0, 360.0));
    }

    #[test]
    fn pointer_move_does_not_touch_eased_position() {
        let mut animator = active_animator();
        animator.on_pointer_move(Point::new(10.0, 10.0));
        assert_eq!(animator.lazy_marker(), Point::new(640.0, 360.0));
    }

    #[test]
    fn deactivation_stops_all_writes() {
        let mut animator = active_animator();
        animator.on_pointer_move(Point::new(0.0, 0.0));
        animator.on_frame();
        let frozen = animator.sample();

        animator.deactivate();
        animator.on_pointer_move(Point::new(900.0, 900.0));

        assert!(!animator.on_frame());
        assert_eq!(animator.sample(), frozen);
        assert!(!animator.is_active());
    }

    #[test]
    fn inactive_animator_ignores_input() {
        let mut animator = PointerFollowAnimator::new(VIEWPORT, Damping::default());
        animator.on_pointer_move(Point::new(1.0, 1.0));
        assert!(!animator.on_frame());
        assert_eq!(animator.instant_marker(), Point::new(640.0, 360.0));
    }

    #[test]
    fn reactivation_does_not_queue_duplicate_frames() {
        let mut scheduler = FrameScheduler::default();
        assert!(scheduler.start());
        assert!(!scheduler.start());
        assert!(scheduler.take_frame());
        assert!(!scheduler.take_frame());
        scheduler.request_frame();
        scheduler.request_frame();
        assert!(scheduler.take_frame());
        assert!(!scheduler.has_pending_frame());
    }

    #[test]
    fn damping_rejects_out_of_range_values() {
        assert_eq!(Damping::new(0.0).value(), MIN_DAMPING);
        assert_eq!(Damping::new(f32::NAN), Damping::default());
    }
}
