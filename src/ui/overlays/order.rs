// SPDX-License-Identifier: MPL-2.0
//! Order confirmation: chat deep link, or a callback request carrying the
//! item title.

use super::{contact_form, Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::disclosure::OverlayKind;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut column = Column::new().spacing(spacing::MD).push(
        text(i18n.tr("order-title"))
            .size(typography::TITLE_MD)
            .font(typography::SERIF)
            .color(palette::CHARCOAL),
    );

    // The detail item may already be gone; the overlay then offers only the callback.
    if let Some(item) = ctx.disclosure.detail_item() {
        let price = item.price.with_currency();
        column = column
            .push(
                text(i18n.tr_with_args(
                    "order-summary",
                    &[("title", item.title.as_str()), ("price", price.as_str())],
                ))
                .size(typography::BODY_LG)
                .color(palette::CHARCOAL),
            )
            .push(
                button(
                    text(i18n.tr("order-open-chat"))
                        .size(typography::BODY)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::primary)
                .on_press(Message::OpenChat),
            );
    }

    column
        .push(
            text(i18n.tr("order-callback-hint"))
                .size(typography::BODY)
                .color(palette::MUTED),
        )
        .push(contact_form(ctx, OverlayKind::Order))
        .into()
}
