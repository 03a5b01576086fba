// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::ui::design_tokens::{palette, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{container, text, Row, Space};
use iced::{Element, Length, Padding};

#[must_use]
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let row = Row::new()
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(
            text(ctx.i18n.tr("footer-copyright").to_uppercase())
                .size(typography::CAPTION)
                .color(palette::MUTED),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            text(ctx.i18n.tr("footer-tagline"))
                .size(typography::CAPTION)
                .font(typography::SERIF_ITALIC)
                .color(palette::GOLD_500),
        );

    container(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::from([0.0, ctx.layout.padding_x()]))
        .style(styles::container::section_rule)
        .into()
}
