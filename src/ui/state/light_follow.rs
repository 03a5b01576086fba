// SPDX-License-Identifier: MPL-2.0
//! Light spot that follows the pointer across a hovered card.
//!
//! The spot is expressed as two percentages of the card's size, the
//! equivalent of the `--mx`/`--my` custom properties a stylesheet would read.

use iced::{Point, Rectangle};

/// Pointer position over a card, in percent of its width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSpot {
    pub x_percent: f32,
    pub y_percent: f32,
}

impl LightSpot {
    /// Spot for a pointer at `pointer` over a card occupying `bounds`.
    ///
    /// Values are not clamped: a pointer slightly outside the card yields
    /// percentages outside `0..=100`, drawn as given by the light layer.
    /// Returns `None` for a zero-sized card.
    #[must_use]
    pub fn from_pointer(pointer: Point, bounds: Rectangle) -> Option<Self> {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return None;
        }
        Some(Self {
            x_percent: (pointer.x - bounds.x) / bounds.width * 100.0,
            y_percent: (pointer.y - bounds.y) / bounds.height * 100.0,
        })
    }
}

/// Hover state of one card: whether the caption overlay shows and where the
/// light sits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardHover {
    spot: Option<LightSpot>,
    hovered: bool,
}

impl CardHover {
    pub fn enter(&mut self) {
        self.hovered = true;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
    }

    /// Updates the spot from a pointer given relative to the card's origin.
    pub fn on_move(&mut self, local_pointer: Point, card_size: iced::Size) {
        let bounds = Rectangle::new(Point::ORIGIN, card_size);
        if let Some(spot) = LightSpot::from_pointer(local_pointer, bounds) {
            self.spot = Some(spot);
        }
    }

    /// Caption overlay opacity: fully shown while hovered.
    #[must_use]
    pub fn overlay_opacity(&self) -> f32 {
        if self.hovered {
            1.0
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn spot(&self) -> Option<LightSpot> {
        self.spot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn spot_is_relative_to_card_bounds() {
        let bounds = Rectangle::new(Point::new(100.0, 200.0), Size::new(400.0, 200.0));
        let spot = LightSpot::from_pointer(Point::new(200.0, 250.0), bounds).expect("non-empty");
        assert_eq!(spot.x_percent, 25.0);
        assert_eq!(spot.y_percent, 25.0);
    }

    #[test]
    fn empty_card_has_no_spot() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(0.0, 10.0));
        assert!(LightSpot::from_pointer(Point::ORIGIN, bounds).is_none());
    }

    #[test]
    fn hover_toggles_overlay_opacity() {
        let mut hover = CardHover::default();
        assert_eq!(hover.overlay_opacity(), 0.0);
        hover.enter();
        hover.on_move(Point::new(30.0, 30.0), Size::new(60.0, 120.0));
        assert_eq!(hover.overlay_opacity(), 1.0);
        assert_eq!(
            hover.spot(),
            Some(LightSpot {
                x_percent: 50.0,
                y_percent: 25.0
            })
        );
        hover.leave();
        assert_eq!(hover.overlay_opacity(), 0.0);
    }
}
