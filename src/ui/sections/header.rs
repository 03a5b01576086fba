// SPDX-License-Identifier: MPL-2.0
//! Fixed header: brand on the left, navigation on the right.
//!
//! All three navigation entries lead to the gallery.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Row, Space};
use iced::{Element, Length, Padding};

const NAV_KEYS: [&str; 3] = ["nav-gallery", "nav-about", "nav-contact"];

#[must_use]
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = text(ctx.i18n.tr("brand-name"))
        .size(typography::TITLE_SM)
        .font(typography::SERIF)
        .color(palette::CHARCOAL);

    let nav = NAV_KEYS.iter().fold(Row::new().spacing(spacing::XL), |row, key| {
        row.push(
            button(text(ctx.i18n.tr(key).to_uppercase()).size(typography::CAPTION))
                .style(styles::button::link)
                .on_press(Message::ScrollToGallery),
        )
    });

    let bar = Row::new()
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(nav);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding(Padding::from([0.0, ctx.layout.padding_x()]))
        .align_y(Vertical::Center)
        .style(styles::container::header)
        .into()
}
