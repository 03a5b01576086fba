// SPDX-License-Identifier: MPL-2.0
//! Everything drawn above the page: the three overlays, the floating
//! affordance, and the notice strip.
//!
//! Overlays read the [`DisclosureController`] and only emit messages; the app
//! feeds those back into the controller. A click on the dimmed backdrop and a
//! click on the panel are reported separately so only the former closes.

mod affordance;
mod consultation;
mod detail;
mod order;

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::disclosure::{ClickTarget, DisclosureController, OverlayKind};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, opaque, text, text_input, Column, Row, Space};
use iced::{Element, Length};

/// Phone field of one contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub phone: String,
    /// i18n key of the last rejection, cleared on edit.
    pub error: Option<&'static str>,
}

/// The two contact forms, kept apart so typing in one leaves the other alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForms {
    order: ContactForm,
    consultation: ContactForm,
}

impl ContactForms {
    /// Form shown in `kind`; the detail overlay has none.
    #[must_use]
    pub fn get(&self, kind: OverlayKind) -> Option<&ContactForm> {
        match kind {
            OverlayKind::Order => Some(&self.order),
            OverlayKind::Consultation => Some(&self.consultation),
            OverlayKind::Detail => None,
        }
    }

    pub fn get_mut(&mut self, kind: OverlayKind) -> Option<&mut ContactForm> {
        match kind {
            OverlayKind::Order => Some(&mut self.order),
            OverlayKind::Consultation => Some(&mut self.consultation),
            OverlayKind::Detail => None,
        }
    }

    /// Empties the form in `kind`.
    pub fn reset(&mut self, kind: OverlayKind) {
        if let Some(form) = self.get_mut(kind) {
            *form = ContactForm::default();
        }
    }
}

/// Contextual data needed to render the overlay layers.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub disclosure: &'a DisclosureController,
    pub forms: &'a ContactForms,
    pub past_boundary: bool,
    /// Already translated.
    pub notice: Option<&'a str>,
}

/// Messages emitted by overlays and floating controls.
#[derive(Debug, Clone)]
pub enum Message {
    Clicked(OverlayKind, ClickTarget),
    Close(OverlayKind),
    PlayProcess,
    OpenOrder,
    OpenChat,
    PhoneChanged(OverlayKind, String),
    Submit(OverlayKind),
    ScrollToGallery,
    OpenConsultation,
    DismissNotice,
}

/// Layers to stack above the page, bottom to top.
#[must_use]
pub fn layers<'a>(ctx: &ViewContext<'a>) -> Vec<Element<'a, Message>> {
    let mut layers = Vec::new();
    if ctx.past_boundary {
        layers.push(affordance::view(ctx));
    }
    if let Some(notice) = ctx.notice {
        layers.push(notice_strip(notice));
    }
    if let Some(item) = ctx.disclosure.detail_item() {
        layers.push(modal(
            OverlayKind::Detail,
            detail::view(ctx, item),
            sizing::DETAIL_WIDTH,
        ));
    }
    if ctx.disclosure.is_open(OverlayKind::Order) {
        layers.push(modal(OverlayKind::Order, order::view(ctx), sizing::DIALOG_WIDTH));
    }
    if ctx.disclosure.is_open(OverlayKind::Consultation) {
        layers.push(modal(
            OverlayKind::Consultation,
            consultation::view(ctx),
            sizing::DIALOG_WIDTH,
        ));
    }
    layers
}

/// Backdrop plus a centered panel at most `max_width` wide.
fn modal<'a>(kind: OverlayKind, panel: Element<'a, Message>, max_width: f32) -> Element<'a, Message> {
    let close = button(text("✕").size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::close)
        .on_press(Message::Close(kind));

    let framed = Column::new()
        .push(container(close).align_right(Length::Fill))
        .push(panel);

    let surface = container(framed)
        .max_width(max_width)
        .padding(spacing::XL)
        .style(styles::container::panel);

    let content = mouse_area(surface).on_press(Message::Clicked(kind, ClickTarget::Content));

    mouse_area(
        container(opaque(content))
            .center(Length::Fill)
            .padding(spacing::XL)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Clicked(kind, ClickTarget::Backdrop))
    .into()
}

/// Phone field, inline error, and submit button for `kind`.
fn contact_form<'a>(ctx: &ViewContext<'a>, kind: OverlayKind) -> Element<'a, Message> {
    let form = ctx.forms.get(kind).cloned().unwrap_or_default();

    let input = text_input(&ctx.i18n.tr("contact-phone-placeholder"), &form.phone)
        .on_input(move |value| Message::PhoneChanged(kind, value))
        .on_submit(Message::Submit(kind))
        .padding(spacing::SM)
        .size(typography::BODY);

    let submit = button(
        text(ctx.i18n.tr("contact-submit"))
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary)
    .on_press(Message::Submit(kind));

    let mut column = Column::new().spacing(spacing::SM).push(input);
    if let Some(key) = form.error {
        column = column.push(
            container(text(ctx.i18n.tr(key)).size(typography::CAPTION))
                .style(styles::container::error_text),
        );
    }
    column.push(submit).into()
}

fn notice_strip<'a>(notice: &'a str) -> Element<'a, Message> {
    let dismiss = button(text("✕").size(typography::CAPTION))
        .style(styles::button::link)
        .on_press(Message::DismissNotice);

    let strip = container(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(text(notice).size(typography::BODY).color(palette::CHARCOAL))
            .push(dismiss),
    )
    .padding([spacing::SM, spacing::MD])
    .style(styles::container::notice);

    Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Space::new().height(Length::Fixed(sizing::HEADER_HEIGHT + spacing::MD)))
        .push(strip)
        .into()
}
