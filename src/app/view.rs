// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls underneath a fixed header; overlays and the custom
//! cursor are stacked above both.

use super::{Message, PAGE_SCROLL_ID};
use crate::catalog::{Catalog, ItemId};
use crate::i18n::I18n;
use crate::ui::disclosure::DisclosureController;
use crate::ui::overlays::{self, ContactForms};
use crate::ui::page_layout::{PageLayout, RevealTarget};
use crate::ui::state::{CardHover, PointerSample, RevealGroup};
use crate::ui::widgets::{scroll_lock_layer, CursorMarkers};
use crate::ui::{sections, styles};
use iced::widget::{container, scrollable, Id, Stack};
use iced::{Element, Length};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub layout: &'a PageLayout,
    pub reveals: &'a RevealGroup<RevealTarget>,
    pub hovers: &'a HashMap<ItemId, CardHover>,
    pub disclosure: &'a DisclosureController,
    pub forms: &'a ContactForms,
    pub past_boundary: bool,
    pub notice: Option<&'a str>,
    /// `None` once the follower is deactivated.
    pub pointer: Option<PointerSample>,
}

/// Renders the page, the header, every open overlay, and the cursor.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page_ctx = sections::ViewContext {
        i18n: ctx.i18n,
        catalog: ctx.catalog,
        layout: ctx.layout,
        reveals: ctx.reveals,
        hovers: ctx.hovers,
    };

    let page = scrollable(sections::page(&page_ctx).map(Message::Page))
        .id(Id::new(PAGE_SCROLL_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let background = container(scroll_lock_layer(page, ctx.disclosure.is_scroll_locked()))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(background)
        .push(sections::header(&page_ctx).map(Message::Page));

    let overlay_ctx = overlays::ViewContext {
        i18n: ctx.i18n,
        disclosure: ctx.disclosure,
        forms: ctx.forms,
        past_boundary: ctx.past_boundary,
        notice: ctx.notice,
    };
    for layer in overlays::layers(&overlay_ctx) {
        stack = stack.push(layer.map(Message::Overlay));
    }

    if let Some(sample) = ctx.pointer {
        stack = stack.push(CursorMarkers::new(sample).into_element());
    }

    stack.into()
}
