// SPDX-License-Identifier: MPL-2.0
use super::{body, eyebrow, reveal_block, top_gap, Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::page_layout::RevealTarget;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length, Padding};

#[must_use]
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let headline = text(ctx.i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .font(typography::SERIF)
        .color(palette::CHARCOAL);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(text(ctx.i18n.tr("hero-cta")).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::ScrollToGallery),
        )
        .push(
            button(text(ctx.i18n.tr("consultation-open")).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline)
                .on_press(Message::OpenConsultation),
        );

    let copy = Column::new()
        .max_width(640.0)
        .spacing(spacing::LG)
        .push(eyebrow(ctx.i18n.tr("hero-eyebrow")))
        .push(headline)
        .push(body(ctx.i18n.tr("hero-subtitle")))
        .push(top_gap(spacing::XS))
        .push(actions);

    let block = container(copy)
        .height(Length::Fill)
        .align_y(Vertical::Center);

    container(reveal_block(ctx, RevealTarget::Hero, block))
        .padding(Padding {
            top: sizing::HEADER_HEIGHT,
            left: ctx.layout.padding_x(),
            ..Padding::ZERO
        })
        .into()
}
