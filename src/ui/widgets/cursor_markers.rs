// SPDX-License-Identifier: MPL-2.0
//! Custom cursor: a dot that sits on the pointer and a glow that trails it.

use crate::ui::design_tokens::{opacity, palette, sizing};
use crate::ui::state::PointerSample;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Rectangle, Renderer, Theme};

/// Canvas program drawing both markers of a [`PointerSample`].
#[derive(Debug, Clone, Copy)]
pub struct CursorMarkers {
    sample: PointerSample,
}

impl CursorMarkers {
    #[must_use]
    pub fn new(sample: PointerSample) -> Self {
        Self { sample }
    }

    /// Full-window canvas; it never reacts to input.
    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for CursorMarkers {
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

        let glow = Path::circle(self.sample.eased, sizing::CURSOR_GLOW / 2.0);
        frame.fill(
            &glow,
            Color {
                a: opacity::CURSOR_GLOW,
                ..palette::GOLD_300
            },
        );
        frame.stroke(
            &glow,
            Stroke::default().with_width(1.0).with_color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GOLD_500
            }),
        );

        let dot = Path::circle(self.sample.raw, sizing::CURSOR_DOT / 2.0);
        frame.fill(&dot, palette::GOLD_700);

        vec![frame.into_geometry()]
    }
}
