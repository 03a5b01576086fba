// SPDX-License-Identifier: MPL-2.0
//! Item detail: artwork or process clip on the left, description and prices
//! on the right.

use super::{Message, ViewContext};
use crate::catalog::CatalogItem;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>, item: &'a CatalogItem) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let process = if ctx.disclosure.is_process_playing() {
        container(
            text(i18n.tr_with_args(
                "detail-process-playing",
                &[("source", item.process_media_ref.as_str())],
            ))
            .size(typography::CAPTION)
            .color(palette::IVORY),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROCESS_HEIGHT))
        .align_y(Vertical::Bottom)
        .style(styles::container::artwork(palette::CHARCOAL))
    } else {
        let play = button(text(format!("▶ {}", i18n.tr("detail-play-process"))).size(typography::BODY))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::floating)
            .on_press(Message::PlayProcess);
        container(play)
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::PROCESS_HEIGHT))
            .style(styles::container::artwork(palette::ARTWORK_WARM))
    };

    let media = Column::new()
        .width(Length::FillPortion(5))
        .spacing(spacing::SM)
        .push(
            text(i18n.tr("detail-process-title").to_uppercase())
                .size(typography::CAPTION)
                .color(palette::GOLD_500),
        )
        .push(process);

    let prices = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(item.old_price.with_currency())
                .size(typography::BODY)
                .color(palette::MUTED),
        )
        .push(
            text(item.price.with_currency())
                .size(typography::TITLE_LG)
                .font(typography::SERIF)
                .color(palette::CHARCOAL),
        );

    let order = button(
        text(i18n.tr("detail-order"))
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary)
    .on_press(Message::OpenOrder);

    let back = button(
        text(i18n.tr("detail-back"))
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::outline)
    .on_press(Message::Close(crate::ui::disclosure::OverlayKind::Detail));

    let info = Column::new()
        .width(Length::FillPortion(4))
        .spacing(spacing::MD)
        .push(
            text(i18n.tr("detail-original").to_uppercase())
                .size(typography::CAPTION)
                .color(palette::GOLD_500),
        )
        .push(
            text(&item.title)
                .size(typography::TITLE_MD)
                .font(typography::SERIF)
                .color(palette::CHARCOAL),
        )
        .push(text(&item.description).size(typography::BODY).color(palette::MUTED))
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(prices)
        .push(order)
        .push(back);

    Row::new()
        .spacing(spacing::XL)
        .push(media)
        .push(info)
        .into()
}
