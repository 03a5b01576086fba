// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, CHARCOAL, IVORY, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gold call-to-action (order, submit, hero link).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, drop) = match status {
        button::Status::Hovered => (palette::GOLD_300, palette::GOLD_500, shadow::SM),
        button::Status::Disabled => (palette::LINE, palette::LINE, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::GOLD_500, palette::GOLD_700, shadow::NONE)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: CHARCOAL,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: drop,
        snap: true,
    }
}

/// Outlined secondary action ("back to the gallery").
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::GOLD_700,
        button::Status::Disabled => palette::MUTED,
        _ => CHARCOAL,
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: palette::LINE,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Bare text link: muted, gold on hover (header navigation).
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GOLD_500,
        _ => palette::MUTED,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round close button sitting on a panel corner.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..CHARCOAL })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Floating pill in the bottom corner of the window.
pub fn floating(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GOLD_500,
        _ => CHARCOAL,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: IVORY,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_accent_colors() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::GOLD_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn link_turns_gold_on_hover() {
        let theme = Theme::Light;
        let normal = link(&theme, button::Status::Active);
        let hover = link(&theme, button::Status::Hovered);
        assert_ne!(normal.text_color, hover.text_color);
        assert_eq!(hover.text_color, palette::GOLD_500);
    }
}
