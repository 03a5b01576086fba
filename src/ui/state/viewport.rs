// SPDX-License-Identifier: MPL-2.0
//! Page viewport state.
//!
//! Tracks the vertical scroll offset of the page and the size of the visible
//! area, as reported by the page scrollable.

use iced::{Point, Rectangle, Size};

/// Scroll position and visible area of the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageViewport {
    /// Current vertical scroll offset.
    pub offset: f32,

    /// Size of the visible area.
    pub size: Size,

    /// Total height of the scrollable content.
    pub content_height: f32,
}

impl PageViewport {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Records a scroll report.
    pub fn update(&mut self, offset: f32, size: Size, content_height: f32) {
        self.offset = offset;
        self.size = size;
        self.content_height = content_height;
    }

    /// Records a window resize; the offset is kept.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// The visible area expressed in content coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rectangle {
        Rectangle::new(Point::new(0.0, self.offset), self.size)
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.size.height).max(0.0)
    }

    /// Converts an absolute offset to the `0.0..=1.0` fraction used by
    /// relative scroll operations.
    #[must_use]
    pub fn relative(&self, offset: f32) -> f32 {
        let max = self.max_offset();
        if max > 0.0 {
            (offset / max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
