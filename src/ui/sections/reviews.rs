// SPDX-License-Identifier: MPL-2.0
use super::{body, eyebrow, heading, reveal_block, Message, ViewContext};
use crate::catalog::Review;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::page_layout::RevealTarget;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, text, Column, Row, Space};
use iced::{Element, Length, Padding};

#[must_use]
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let titles = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Space::new().height(Length::Fill))
        .push(eyebrow(ctx.i18n.tr("reviews-eyebrow")))
        .push(heading(ctx.i18n.tr("reviews-title"), typography::TITLE_LG));

    let cards = ctx
        .catalog
        .reviews()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(sizing::GALLERY_GAP), |row, (index, review)| {
            row.push(reveal_block(ctx, RevealTarget::Review(index), review_card(ctx, review)))
        });

    let content = Column::new()
        .spacing(sizing::GALLERY_GAP)
        .push(reveal_block(ctx, RevealTarget::ReviewsHeading, titles))
        .push(cards);

    container(content)
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

fn review_card<'a>(ctx: &ViewContext<'a>, review: &'a Review) -> Element<'a, Message> {
    let thumbnail = container(Space::new())
        .width(Length::Fill)
        .height(Length::FillPortion(3))
        .style(styles::container::artwork(palette::ARTWORK_WARM));

    let quote = text(format!("«{}»", review.quote))
        .size(typography::BODY_LG)
        .font(typography::SERIF)
        .color(palette::CHARCOAL);

    let signature = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::XS)
        .push(
            text(&review.author)
                .size(typography::BODY)
                .color(palette::CHARCOAL),
        )
        .push(body(review.locality.as_str()));

    let related = text(ctx.i18n.tr_with_args("review-related", &[("title", review.related_title.as_str())]))
        .size(typography::CAPTION)
        .color(palette::GOLD_500);

    Column::new()
        .spacing(spacing::MD)
        .push(thumbnail)
        .push(
            Column::new()
                .height(Length::FillPortion(2))
                .spacing(spacing::SM)
                .push(quote)
                .push(signature)
                .push(related),
        )
        .into()
}
