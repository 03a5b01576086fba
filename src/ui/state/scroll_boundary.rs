// SPDX-License-Identifier: MPL-2.0
//! Scroll boundary tracking for the floating affordance.
//!
//! The watcher answers a single question on every scroll tick: has the named
//! anchor's top edge moved above the top of the viewport? An anchor that
//! cannot be located reads as "not past", which keeps the affordance hidden.

/// Resolves anchors to their top edge in viewport coordinates.
///
/// Negative values mean the anchor starts above the visible area.
pub trait AnchorLocator {
    fn anchor_top(&self, anchor: &str) -> Option<f32>;
}

impl<F> AnchorLocator for F
where
    F: Fn(&str) -> Option<f32>,
{
    fn anchor_top(&self, anchor: &str) -> Option<f32> {
        self(anchor)
    }
}

/// Derived "past boundary" signal for one anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollBoundaryWatcher {
    anchor: String,
    past_boundary: bool,
    listening: bool,
}

impl ScrollBoundaryWatcher {
    /// Creates a detached watcher. Call [`attach`](Self::attach) to start.
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            past_boundary: false,
            listening: false,
        }
    }

    /// Starts listening and computes the initial signal.
    pub fn attach(&mut self, locator: &impl AnchorLocator) -> bool {
        self.listening = true;
        self.recompute(locator)
    }

    /// Recomputes the signal for a scroll tick. Ignored once detached.
    pub fn on_scroll(&mut self, locator: &impl AnchorLocator) -> bool {
        if !self.listening {
            return self.past_boundary;
        }
        self.recompute(locator)
    }

    /// Stops listening. The last computed signal is kept for rendering.
    pub fn detach(&mut self) {
        self.listening = false;
    }

    #[must_use]
    pub fn is_past_boundary(&self) -> bool {
        self.past_boundary
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    fn recompute(&mut self, locator: &impl AnchorLocator) -> bool {
        let past = match locator.anchor_top(&self.anchor) {
            Some(top) => top < 0.0,
            None => false,
        };
        if past != self.past_boundary {
            tracing::debug!(anchor = %self.anchor, past, "scroll boundary crossed");
        }
        self.past_boundary = past;
        past
    }
}

/// Content offset that aligns `anchor`'s top edge with the viewport top.
///
/// `current_offset` is the present scroll offset of the page. Returns `None`
/// when the anchor cannot be located.
#[must_use]
pub fn anchor_scroll_target(
    locator: &impl AnchorLocator,
    anchor: &str,
    current_offset: f32,
) -> Option<f32> {
    locator
        .anchor_top(anchor)
        .map(|top| (current_offset + top).max(0.0))
}
