// SPDX-License-Identifier: MPL-2.0
//! Fixed page geometry.
//!
//! The page is laid out from constants, so every section, card, and reveal
//! block has a rectangle in content coordinates before anything is drawn.
//! Views render at exactly these sizes; scroll and reveal logic reads them
//! back instead of querying widgets.

use crate::catalog::{Catalog, ItemId};
use crate::ui::design_tokens::sizing;
use crate::ui::state::AnchorLocator;
use iced::{Rectangle, Size};

/// Gallery rows as `(item id, column span)`.
pub const GALLERY_ROWS: [&[(ItemId, f32)]; 3] = [
    &[(2, 2.0), (1, 1.0)],
    &[(5, 1.0), (4, 2.0)],
    &[(3, 1.5), (6, 1.5)],
];

/// Columns the row spans are measured against.
const GALLERY_COLUMNS: f32 = 3.0;

/// Named page sections, in scroll order.
pub const SECTIONS: [&str; 5] = ["hero", "gallery", "reviews", "about", "footer"];

/// Blocks that fade in once as they scroll into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    Hero,
    GalleryHeading,
    Card(ItemId),
    ReviewsHeading,
    Review(usize),
    About,
}

/// A card and where it sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    pub id: ItemId,
    pub bounds: Rectangle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    viewport: Size,
    padding_x: f32,
    sections: [Rectangle; 5],
    hero_block: Rectangle,
    gallery_heading: Rectangle,
    rows: Vec<Vec<CardSlot>>,
    row_height: f32,
    reviews_heading: Rectangle,
    review_cards: Vec<Rectangle>,
    about_block: Rectangle,
    content_height: f32,
}

/// Horizontal page padding for a window `width` wide.
#[must_use]
pub fn page_padding_x(width: f32) -> f32 {
    (width * 0.06).clamp(sizing::PAGE_PADDING_X_MIN, sizing::PAGE_PADDING_X_MAX)
}

impl PageLayout {
    /// Lays the page out for a `viewport`-sized window showing `catalog`.
    ///
    /// Gallery slots whose item is missing from the catalog are dropped.
    #[must_use]
    pub fn compute(viewport: Size, catalog: &Catalog) -> Self {
        let width = viewport.width.max(0.0);
        let padding_x = page_padding_x(width);
        let inner_width = (width - 2.0 * padding_x).max(0.0);
        let pad_y = sizing::SECTION_PADDING_Y;
        let gap = sizing::GALLERY_GAP;
        let block = |y: f32, height: f32| Rectangle::new((padding_x, y).into(), Size::new(inner_width, height));

        // Hero
        let hero_height = viewport.height.max(sizing::HERO_MIN_HEIGHT);
        let hero = Rectangle::new((0.0, 0.0).into(), Size::new(width, hero_height));
        let hero_block = block(sizing::HEADER_HEIGHT, hero_height - sizing::HEADER_HEIGHT);

        // Gallery
        let gallery_top = hero_height;
        let gallery_heading = block(gallery_top + pad_y, sizing::SECTION_HEADING_HEIGHT);
        let column_width = ((inner_width - gap * (GALLERY_COLUMNS - 1.0)) / GALLERY_COLUMNS).max(0.0);
        let row_height = column_width.min(sizing::GALLERY_ROW_MAX);
        let mut rows = Vec::with_capacity(GALLERY_ROWS.len());
        let mut y = gallery_heading.y + gallery_heading.height + gap;
        for row in GALLERY_ROWS {
            let present: Vec<(ItemId, f32)> = row
                .iter()
                .copied()
                .filter(|(id, _)| catalog.get(*id).is_some())
                .collect();
            let spans: f32 = present.iter().map(|(_, span)| span).sum();
            let gaps = gap * (present.len().saturating_sub(1)) as f32;
            let mut x = padding_x;
            let mut slots = Vec::with_capacity(present.len());
            for (id, span) in present {
                let card_width = (inner_width - gaps).max(0.0) * span / spans;
                slots.push(CardSlot {
                    id,
                    bounds: Rectangle::new((x, y).into(), Size::new(card_width, row_height)),
                });
                x += card_width + gap;
            }
            rows.push(slots);
            y += row_height + gap;
        }
        let gallery_height = y - gap + pad_y - gallery_top;
        let gallery = Rectangle::new((0.0, gallery_top).into(), Size::new(width, gallery_height));

        // Reviews
        let reviews_top = gallery_top + gallery_height;
        let reviews_heading = block(reviews_top + pad_y, sizing::SECTION_HEADING_HEIGHT);
        let review_count = catalog.reviews().len();
        let review_y = reviews_heading.y + reviews_heading.height + gap;
        let review_width = if review_count == 0 {
            0.0
        } else {
            ((inner_width - gap * (review_count - 1) as f32) / review_count as f32).max(0.0)
        };
        let review_cards = (0..review_count)
            .map(|index| {
                let x = padding_x + index as f32 * (review_width + gap);
                Rectangle::new((x, review_y).into(), Size::new(review_width, sizing::REVIEW_CARD_HEIGHT))
            })
            .collect();
        let reviews_height = pad_y
            + sizing::SECTION_HEADING_HEIGHT
            + gap
            + sizing::REVIEW_CARD_HEIGHT
            + pad_y;
        let reviews = Rectangle::new((0.0, reviews_top).into(), Size::new(width, reviews_height));

        // About
        let about_top = reviews_top + reviews_height;
        let about_block = block(about_top + pad_y, sizing::ABOUT_BLOCK_HEIGHT);
        let about_height = pad_y + sizing::ABOUT_BLOCK_HEIGHT + pad_y;
        let about = Rectangle::new((0.0, about_top).into(), Size::new(width, about_height));

        // Footer
        let footer_top = about_top + about_height;
        let footer = Rectangle::new((0.0, footer_top).into(), Size::new(width, sizing::FOOTER_HEIGHT));

        Self {
            viewport,
            padding_x,
            sections: [hero, gallery, reviews, about, footer],
            hero_block,
            gallery_heading,
            rows,
            row_height,
            reviews_heading,
            review_cards,
            about_block,
            content_height: footer_top + sizing::FOOTER_HEIGHT,
        }
    }

    /// Bounds of a named section, if there is one.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<Rectangle> {
        SECTIONS
            .iter()
            .position(|section| *section == name)
            .map(|index| self.sections[index])
    }

    /// Bounds of a reveal block; `None` when the block is not on the page.
    #[must_use]
    pub fn bounds_of(&self, target: RevealTarget) -> Option<Rectangle> {
        match target {
            RevealTarget::Hero => Some(self.hero_block),
            RevealTarget::GalleryHeading => Some(self.gallery_heading),
            RevealTarget::Card(id) => self.card(id).map(|slot| slot.bounds),
            RevealTarget::ReviewsHeading => Some(self.reviews_heading),
            RevealTarget::Review(index) => self.review_cards.get(index).copied(),
            RevealTarget::About => Some(self.about_block),
        }
    }

    /// Every reveal block on the page.
    #[must_use]
    pub fn reveal_targets(&self) -> Vec<RevealTarget> {
        let mut targets = vec![RevealTarget::Hero, RevealTarget::GalleryHeading];
        targets.extend(self.cards().map(|slot| RevealTarget::Card(slot.id)));
        targets.push(RevealTarget::ReviewsHeading);
        targets.extend((0..self.review_cards.len()).map(RevealTarget::Review));
        targets.push(RevealTarget::About);
        targets
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardSlot> {
        self.rows.iter().flatten()
    }

    #[must_use]
    pub fn card(&self, id: ItemId) -> Option<&CardSlot> {
        self.cards().find(|slot| slot.id == id)
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<CardSlot>] {
        &self.rows
    }

    #[must_use]
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    #[must_use]
    pub fn padding_x(&self) -> f32 {
        self.padding_x
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Anchor lookup for the page scrolled down by `offset`.
    #[must_use]
    pub fn anchors(&self, offset: f32) -> PageAnchors<'_> {
        PageAnchors {
            layout: self,
            offset,
        }
    }
}

/// Section tops relative to the viewport at a given scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct PageAnchors<'a> {
    layout: &'a PageLayout,
    offset: f32,
}

impl AnchorLocator for PageAnchors<'_> {
    fn anchor_top(&self, anchor: &str) -> Option<f32> {
        self.layout.section(anchor).map(|bounds| bounds.y - self.offset)
    }
}
