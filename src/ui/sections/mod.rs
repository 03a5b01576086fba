// SPDX-License-Identifier: MPL-2.0
//! The scrolling page: hero, gallery, reviews, about, footer, plus the fixed
//! header drawn over it.
//!
//! Every section is rendered at the height [`PageLayout`] gave it, so the
//! anchors and reveal rectangles computed there match what is on screen.
//! Blocks that have not been revealed yet keep their space but draw nothing.

mod about;
mod footer;
mod gallery;
mod header;
mod hero;
mod reviews;

pub use header::view as header;

use crate::catalog::{Catalog, ItemId};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, typography};
use crate::ui::page_layout::{PageLayout, RevealTarget};
use crate::ui::state::{CardHover, RevealGroup};
use iced::widget::{container, text, Column, Space};
use iced::{Element, Length, Point, Rectangle};
use std::collections::HashMap;

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub layout: &'a PageLayout,
    pub reveals: &'a RevealGroup<RevealTarget>,
    pub hovers: &'a HashMap<ItemId, CardHover>,
}

/// Messages emitted by the page.
#[derive(Debug, Clone)]
pub enum Message {
    SelectItem(ItemId),
    CardEntered(ItemId),
    CardExited(ItemId),
    /// Pointer moved over a card, relative to the card's origin.
    CardMoved(ItemId, Point),
    ScrollToGallery,
    OpenConsultation,
}

/// Render the scrolling content column.
#[must_use]
pub fn page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(section(ctx, "hero", hero::view(ctx)))
        .push(section(ctx, "gallery", gallery::view(ctx)))
        .push(section(ctx, "reviews", reviews::view(ctx)))
        .push(section(ctx, "about", about::view(ctx)))
        .push(section(ctx, "footer", footer::view(ctx)))
        .into()
}

fn section<'a>(ctx: &ViewContext<'a>, name: &str, content: Element<'a, Message>) -> Element<'a, Message> {
    let height = ctx.layout.section(name).map_or(0.0, |bounds| bounds.height);
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

/// `content` sized to `bounds` once `target` is revealed, empty space before.
fn reveal_block<'a>(
    ctx: &ViewContext<'a>,
    target: RevealTarget,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let bounds = ctx.layout.bounds_of(target).unwrap_or(Rectangle::default());
    if ctx.reveals.is_revealed(target) {
        container(content)
            .width(Length::Fixed(bounds.width))
            .height(Length::Fixed(bounds.height))
            .into()
    } else {
        Space::new()
            .width(Length::Fixed(bounds.width))
            .height(Length::Fixed(bounds.height))
            .into()
    }
}

/// Small gold uppercase line above a heading.
fn eyebrow<'a>(label: String) -> Element<'a, Message> {
    text(label.to_uppercase())
        .size(typography::CAPTION)
        .color(palette::GOLD_500)
        .into()
}

/// Serif section heading.
fn heading<'a>(label: String, size: f32) -> Element<'a, Message> {
    text(label)
        .size(size)
        .font(typography::SERIF)
        .color(palette::CHARCOAL)
        .into()
}

/// Muted paragraph text.
fn body<'a>(label: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    text(label)
        .size(typography::BODY)
        .color(palette::MUTED)
        .into()
}

/// Lines kept between stacked blocks of one section.
fn top_gap<'a>(height: f32) -> Element<'a, Message> {
    Space::new().height(Length::Fixed(height)).into()
}
