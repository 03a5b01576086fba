// SPDX-License-Identifier: MPL-2.0
//! Gallery grid. Each card reveals on its own, shows a caption while hovered,
//! and carries a light spot that follows the pointer.

use super::{eyebrow, heading, reveal_block, Message, ViewContext};
use crate::catalog::CatalogItem;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::page_layout::{CardSlot, RevealTarget};
use crate::ui::state::CardHover;
use crate::ui::styles;
use crate::ui::widgets::LightSpotLayer;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, mouse_area, text, Column, Row, Space, Stack};
use iced::{Color, Element, Length, Padding};

#[must_use]
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::SM)
        .push(eyebrow(ctx.i18n.tr("gallery-eyebrow")))
        .push(heading(ctx.i18n.tr("gallery-title"), typography::TITLE_LG));
    let hint = text(ctx.i18n.tr("gallery-hint"))
        .size(typography::CAPTION)
        .color(palette::MUTED)
        .align_x(Horizontal::Right);
    let heading_row = Row::new()
        .align_y(Vertical::Bottom)
        .height(Length::Fill)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(hint);

    let grid = ctx.layout.rows().iter().fold(
        Column::new()
            .spacing(sizing::GALLERY_GAP)
            .push(reveal_block(ctx, RevealTarget::GalleryHeading, heading_row)),
        |column, row| {
            let cards = row.iter().fold(Row::new().spacing(sizing::GALLERY_GAP), |cards, slot| {
                cards.push(card_slot(ctx, slot))
            });
            column.push(cards)
        },
    );

    container(grid)
        .padding(Padding {
            top: sizing::SECTION_PADDING_Y,
            left: ctx.layout.padding_x(),
            ..Padding::ZERO
        })
        .into()
}

fn card_slot<'a>(ctx: &ViewContext<'a>, slot: &CardSlot) -> Element<'a, Message> {
    match ctx.catalog.get(slot.id) {
        Some(item) => {
            let hover = ctx.hovers.get(&slot.id).copied().unwrap_or_default();
            reveal_block(ctx, RevealTarget::Card(slot.id), card(ctx, item, hover))
        }
        None => Space::new()
            .width(Length::Fixed(slot.bounds.width))
            .height(Length::Fixed(slot.bounds.height))
            .into(),
    }
}

fn card<'a>(ctx: &ViewContext<'a>, item: &'a CatalogItem, hover: CardHover) -> Element<'a, Message> {
    let tone = if item.id % 2 == 0 {
        palette::ARTWORK_COOL
    } else {
        palette::ARTWORK_WARM
    };
    let artwork = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::artwork(tone));

    let alpha = hover.overlay_opacity();
    let fade = |color: Color| Color {
        a: color.a * alpha,
        ..color
    };
    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(&item.title)
                .size(typography::TITLE_SM)
                .font(typography::SERIF)
                .color(fade(palette::IVORY)),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(
                    text(item.old_price.with_currency())
                        .size(typography::CAPTION)
                        .color(fade(palette::LINE)),
                )
                .push(
                    text(item.price.with_currency())
                        .size(typography::BODY)
                        .color(fade(palette::GOLD_300)),
                ),
        )
        .push(
            text(ctx.i18n.tr("card-watch-process").to_uppercase())
                .size(typography::CAPTION)
                .color(fade(palette::GOLD_300)),
        );
    let caption_band = container(
        container(caption)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::card_caption(alpha)),
    )
    .height(Length::Fill)
    .align_y(Vertical::Bottom);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(artwork);
    if let Some(spot) = hover.spot() {
        layers = layers.push(LightSpotLayer::new(spot, alpha).into_element());
    }
    layers = layers.push(caption_band);

    let id = item.id;
    mouse_area(layers)
        .on_press(Message::SelectItem(id))
        .on_enter(Message::CardEntered(id))
        .on_exit(Message::CardExited(id))
        .on_move(move |position| Message::CardMoved(id, position))
        .into()
}
