// SPDX-License-Identifier: MPL-2.0
use super::{contact_form, Message, ViewContext};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::disclosure::OverlayKind;
use iced::widget::{text, Column};
use iced::Element;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(
            text(ctx.i18n.tr("consultation-title"))
                .size(typography::TITLE_MD)
                .font(typography::SERIF)
                .color(palette::CHARCOAL),
        )
        .push(
            text(ctx.i18n.tr("consultation-body"))
                .size(typography::BODY)
                .color(palette::MUTED),
        )
        .push(contact_form(ctx, OverlayKind::Consultation))
        .into()
}
