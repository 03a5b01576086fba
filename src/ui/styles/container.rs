// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, CHARCOAL, IVORY},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(IVORY)),
        text_color: Some(CHARCOAL),
        ..Default::default()
    }
}

/// Translucent fixed header with a hairline under it.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::HEADER,
            ..IVORY
        })),
        border: Border {
            color: palette::LINE,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Section separated from the previous one by a top rule.
pub fn section_rule(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::LINE,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Dimmed area behind an overlay panel.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..CHARCOAL
        })),
        ..Default::default()
    }
}

/// Overlay panel surface.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(IVORY)),
        text_color: Some(CHARCOAL),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Stand-in for artwork that is not loaded: a flat tone with a frame.
pub fn artwork(tone: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tone)),
        text_color: Some(IVORY),
        border: Border {
            color: palette::LINE,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Caption band over a hovered card; `alpha` follows the hover state.
pub fn card_caption(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha,
            ..CHARCOAL
        })),
        text_color: Some(Color { a: alpha, ..IVORY }),
        ..Default::default()
    }
}

/// Inline validation message under a form field.
pub fn error_text(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}

/// Dismissable notice strip shown under the header.
pub fn notice(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PAPER)),
        text_color: Some(CHARCOAL),
        border: Border {
            color: palette::GOLD_300,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}
