// SPDX-License-Identifier: MPL-2.0
//! Floating controls shown once the gallery has scrolled past the top.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let pill = |label: String, message: Message| {
        button(text(label).size(typography::BODY))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::floating)
            .on_press(message)
    };

    let controls = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Right)
        .push(pill(ctx.i18n.tr("consultation-open"), Message::OpenConsultation))
        .push(pill(ctx.i18n.tr("affordance-to-gallery"), Message::ScrollToGallery));

    container(controls)
        .align_right(Length::Fill)
        .align_bottom(Length::Fill)
        .padding(spacing::XL)
        .into()
}
