// SPDX-License-Identifier: MPL-2.0
use super::{body, eyebrow, heading, reveal_block, Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::page_layout::RevealTarget;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{container, Column};
use iced::{Element, Length, Padding};

#[must_use]
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let copy = Column::new()
        .max_width(640.0)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(eyebrow(ctx.i18n.tr("about-eyebrow")))
        .push(heading(ctx.i18n.tr("about-title"), typography::TITLE_MD))
        .push(body(ctx.i18n.tr("about-body")));

    let block = container(copy).center_x(Length::Fill);

    container(reveal_block(ctx, RevealTarget::About, block))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: sizing::SECTION_PADDING_Y,
            left: ctx.layout.padding_x(),
            ..Padding::ZERO
        })
        .style(styles::container::section_rule)
        .into()
}
