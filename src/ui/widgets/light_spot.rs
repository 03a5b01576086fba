// SPDX-License-Identifier: MPL-2.0
//! Soft light following the pointer over a hovered card.

use crate::ui::design_tokens::{opacity, palette};
use crate::ui::state::LightSpot;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// Rings drawn per glow; more rings, smoother falloff.
const RINGS: u16 = 12;

/// Canvas program painting a radial falloff centered on a [`LightSpot`].
#[derive(Debug, Clone, Copy)]
pub struct LightSpotLayer {
    spot: LightSpot,
    intensity: f32,
}

impl LightSpotLayer {
    /// `intensity` scales the glow, `0.0` draws nothing.
    #[must_use]
    pub fn new(spot: LightSpot, intensity: f32) -> Self {
        Self {
            spot,
            intensity: intensity.clamp(0.0, 1.0),
        }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for LightSpotLayer {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        if self.intensity <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let center = Point::new(
            bounds.width * self.spot.x_percent / 100.0,
            bounds.height * self.spot.y_percent / 100.0,
        );
        let max_radius = bounds.width.max(bounds.height) * 0.6;
        let step_alpha = opacity::LIGHT_SPOT * self.intensity / f32::from(RINGS);

        // Outer rings first; stacked fills brighten toward the center.
        for ring in (1..=RINGS).rev() {
            let radius = max_radius * f32::from(ring) / f32::from(RINGS);
            frame.fill(
                &Path::circle(center, radius),
                Color {
                    a: step_alpha,
                    ..palette::WHITE
                },
            );
        }

        vec![frame.into_geometry()]
    }
}
