// SPDX-License-Identifier: MPL-2.0
//! One-shot reveal of content blocks entering the viewport.
//!
//! Each block owns its own [`RevealOnEnter`]. The first time the visible
//! fraction of the block reaches the threshold it flips to revealed and stops
//! observing; leaving and re-entering the viewport afterwards changes nothing.

use crate::config::DEFAULT_REVEAL_THRESHOLD;
use iced::Rectangle;

/// Observation state of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Waiting for the block to become visible enough.
    Watching,
    /// Shown for good. Observation has ended.
    Revealed,
    /// Observation was cancelled before the block was ever shown.
    Detached,
}

/// Per-element reveal detector.
///
/// `H` identifies the observed element (a section key, an item id...).
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOnEnter<H> {
    handle: H,
    threshold: f32,
    state: RevealState,
}

impl<H> RevealOnEnter<H> {
    /// Starts observing `handle` with the default threshold.
    pub fn new(handle: H) -> Self {
        Self::with_threshold(handle, DEFAULT_REVEAL_THRESHOLD)
    }

    /// Starts observing `handle`; `threshold` is clamped to `0.0..=1.0`.
    pub fn with_threshold(handle: H, threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };
        Self {
            handle,
            threshold,
            state: RevealState::Watching,
        }
    }

    /// Feeds the currently visible fraction of the element.
    ///
    /// Returns `true` only on the call that reveals it.
    pub fn on_intersection(&mut self, visible_fraction: f32) -> bool {
        if self.state != RevealState::Watching {
            return false;
        }
        if visible_fraction > 0.0 && visible_fraction >= self.threshold {
            self.state = RevealState::Revealed;
            return true;
        }
        false
    }

    /// Convenience wrapper computing the fraction from layout rectangles.
    pub fn observe(&mut self, element: Rectangle, viewport: Rectangle) -> bool {
        if self.state != RevealState::Watching {
            return false;
        }
        self.on_intersection(visible_fraction(element, viewport))
    }

    /// Cancels observation. A revealed element stays revealed.
    pub fn detach(&mut self) {
        if self.state == RevealState::Watching {
            self.state = RevealState::Detached;
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.state == RevealState::Watching
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }
}

/// The detectors of every block on a page, fed together.
///
/// Each detector still decides on its own; the group only saves callers from
/// looping and looking up bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup<H> {
    members: Vec<RevealOnEnter<H>>,
}

impl<H> Default for RevealGroup<H> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<H: Copy + PartialEq> RevealGroup<H> {
    #[must_use]
    pub fn new(handles: impl IntoIterator<Item = H>, threshold: f32) -> Self {
        Self {
            members: handles
                .into_iter()
                .map(|handle| RevealOnEnter::with_threshold(handle, threshold))
                .collect(),
        }
    }

    /// Checks every still-watching block against `viewport`.
    ///
    /// Blocks `bounds_of` cannot place are skipped. Returns how many blocks
    /// were revealed by this call.
    pub fn observe_all(
        &mut self,
        bounds_of: impl Fn(H) -> Option<Rectangle>,
        viewport: Rectangle,
    ) -> usize {
        let mut revealed = 0;
        for member in self.members.iter_mut().filter(|member| member.is_observing()) {
            let Some(bounds) = bounds_of(*member.handle()) else {
                continue;
            };
            if member.observe(bounds, viewport) {
                revealed += 1;
            }
        }
        revealed
    }

    /// `false` for unknown handles.
    #[must_use]
    pub fn is_revealed(&self, handle: H) -> bool {
        self.members
            .iter()
            .any(|member| *member.handle() == handle && member.is_revealed())
    }

    /// Stops every block still watching.
    pub fn detach_all(&mut self) {
        self.members.iter_mut().for_each(RevealOnEnter::detach);
    }

    #[must_use]
    pub fn watching(&self) -> usize {
        self.members.iter().filter(|member| member.is_observing()).count()
    }
}

/// Share of `element`'s area lying inside `viewport`, in `0.0..=1.0`.
///
/// Degenerate elements (zero area) report `0.0`.
#[must_use]
pub fn visible_fraction(element: Rectangle, viewport: Rectangle) -> f32 {
    let area = element.width * element.height;
    if area <= 0.0 {
        return 0.0;
    }
    element
        .intersection(&viewport)
        .map(|overlap| (overlap.width * overlap.height / area).clamp(0.0, 1.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rectangle {
        Rectangle::new(iced::Point::ORIGIN, iced::Size::new(1000.0, 800.0))
    }

    fn block_at(y: f32) -> Rectangle {
        Rectangle::new(iced::Point::new(0.0, y), iced::Size::new(400.0, 100.0))
    }

    #[test]
    fn below_threshold_keeps_watching() {
        let mut reveal = RevealOnEnter::new("gallery");
        assert!(!reveal.on_intersection(0.05));
        assert!(reveal.is_observing());
        assert!(!reveal.is_revealed());
    }

    #[test]
    fn reaching_threshold_reveals_once() {
        let mut reveal = RevealOnEnter::new("gallery");
        assert!(reveal.on_intersection(0.12));
        assert!(reveal.is_revealed());

        assert!(!reveal.on_intersection(1.0));
        assert!(!reveal.on_intersection(0.0));
        assert!(reveal.is_revealed());
        assert!(!reveal.is_observing());
    }

    #[test]
    fn leaving_viewport_after_reveal_does_not_hide() {
        let mut reveal = RevealOnEnter::new(7_u32);
        assert!(reveal.observe(block_at(750.0), viewport()));
        assert!(!reveal.observe(block_at(5_000.0), viewport()));
        assert!(!reveal.observe(block_at(100.0), viewport()));
        assert_eq!(reveal.state(), RevealState::Revealed);
    }

    #[test]
    fn detach_before_visibility_has_no_effect() {
        let mut reveal = RevealOnEnter::new("about");
        reveal.detach();
        assert_eq!(reveal.state(), RevealState::Detached);
        assert!(!reveal.on_intersection(1.0));
        assert!(!reveal.is_revealed());
    }

    #[test]
    fn detach_after_reveal_keeps_revealed() {
        let mut reveal = RevealOnEnter::new("about");
        reveal.on_intersection(0.5);
        reveal.detach();
        assert!(reveal.is_revealed());
    }

    #[test]
    fn instances_are_independent() {
        let mut first = RevealOnEnter::new(1_u32);
        let second = RevealOnEnter::new(2_u32);
        first.on_intersection(1.0);
        assert!(first.is_revealed());
        assert!(second.is_observing());
    }

    #[test]
    fn zero_threshold_still_requires_some_visibility() {
        let mut reveal = RevealOnEnter::with_threshold("hero", 0.0);
        assert!(!reveal.on_intersection(0.0));
        assert!(reveal.on_intersection(0.01));
    }

    #[test]
    fn group_reveals_visible_blocks_and_skips_unplaced_ones() {
        let mut group = RevealGroup::new([1_u32, 2, 3], 0.12);
        let bounds_of = |handle: u32| match handle {
            1 => Some(block_at(100.0)),
            2 => Some(block_at(5_000.0)),
            _ => None,
        };

        assert_eq!(group.observe_all(bounds_of, viewport()), 1);
        assert!(group.is_revealed(1));
        assert!(!group.is_revealed(2));
        assert!(!group.is_revealed(3));
        assert_eq!(group.watching(), 2);

        group.detach_all();
        assert_eq!(group.watching(), 0);
        assert_eq!(group.observe_all(|_| Some(block_at(0.0)), viewport()), 0);
        assert!(group.is_revealed(1));
        assert!(!group.is_revealed(99));
    }

    #[test]
    fn visible_fraction_of_partially_visible_block() {
        // 50 of 100 px inside the viewport.
        let fraction = visible_fraction(block_at(750.0), viewport());
        assert!((fraction - 0.5).abs() < 1e-6);
    }

    #[test]
    fn visible_fraction_outside_viewport_is_zero() {
        assert_eq!(visible_fraction(block_at(900.0), viewport()), 0.0);
        let empty = Rectangle::new(iced::Point::ORIGIN, iced::Size::new(0.0, 0.0));
        assert_eq!(visible_fraction(empty, viewport()), 0.0);
    }
}
