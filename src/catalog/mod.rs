// SPDX-License-Identifier: MPL-2.0
//! Catalog content: the paintings on sale and the review entries.
//!
//! The catalog is supplied once at startup and never mutated afterwards.
//! Nothing in the motion or disclosure layers depends on how many items it
//! holds or on their exact values.

mod price;

pub use price::{Price, CURRENCY_SIGN, GROUP_SEPARATOR};

use std::sync::Arc;

/// Identifier of a catalog item.
pub type ItemId = u32;

/// Frame shape a card is laid out with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectClass {
    Portrait,
    Landscape,
    Square,
}

impl AspectClass {
    /// Height divided by width.
    #[must_use]
    pub fn height_ratio(self) -> f32 {
        match self {
            AspectClass::Portrait => 4.0 / 3.0,
            AspectClass::Landscape => 9.0 / 16.0,
            AspectClass::Square => 1.0,
        }
    }
}

/// A painting on sale.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub preview_image: String,
    pub process_media_ref: String,
    pub price: Price,
    pub old_price: Price,
    pub aspect_class: AspectClass,
}

/// A customer review shown below the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub author: String,
    pub locality: String,
    pub quote: String,
    pub thumbnail_ref: String,
    pub related_title: String,
}

/// Ordered, immutable catalog content.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Arc<[CatalogItem]>,
    reviews: Arc<[Review]>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<CatalogItem>, reviews: Vec<Review>) -> Self {
        Self {
            items: items.into(),
            reviews: reviews.into(),
        }
    }

    /// The collection shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let process = "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1";
        let item = |id: ItemId,
                    title: &str,
                    description: &str,
                    aspect_class: AspectClass,
                    price: u32,
                    old_price: u32| CatalogItem {
            id,
            title: title.to_string(),
            description: description.to_string(),
            preview_image: format!("painting-{id}.jpg"),
            process_media_ref: process.to_string(),
            price: Price::new(price),
            old_price: Price::new(old_price),
            aspect_class,
        };

        let items = vec![
            item(
                1,
                "Золотой горизонт",
                "Пространство между небом и землёй, где свет становится материей. Масло, золотая фольга на холсте. 80×80 см.",
                AspectClass::Square,
                48_000,
                64_000,
            ),
            item(
                2,
                "Белый сад",
                "Цветение как внутреннее состояние. Акрил, масло на холсте. 60×80 см.",
                AspectClass::Landscape,
                36_000,
                45_000,
            ),
            item(
                3,
                "Прибой",
                "Волна, застывшая в золотом мгновении. Масло, золотая патина. 70×70 см.",
                AspectClass::Square,
                42_000,
                55_000,
            ),
            item(
                4,
                "Туманный лес",
                "Лес на рассвете — место между сном и явью. Масло на холсте. 100×80 см.",
                AspectClass::Landscape,
                58_000,
                72_000,
            ),
            item(
                5,
                "Горный туман",
                "Молчание гор. Смешанная техника, холст. 60×60 см.",
                AspectClass::Square,
                29_900,
                38_000,
            ),
            item(
                6,
                "Дюны",
                "Ритм песчаных волн под вечерним светом. Масло на холсте. 90×60 см.",
                AspectClass::Landscape,
                39_000,
                49_000,
            ),
        ];

        let review = |author: &str, locality: &str, quote: &str, thumb: ItemId, title: &str| Review {
            author: author.to_string(),
            locality: locality.to_string(),
            quote: quote.to_string(),
            thumbnail_ref: format!("painting-{thumb}.jpg"),
            related_title: title.to_string(),
        };

        let reviews = vec![
            review(
                "Анна М.",
                "Москва",
                "Картина превзошла все ожидания. Живая, тёплая, наполненная светом. Теперь это центр нашей гостиной.",
                1,
                "Золотой горизонт",
            ),
            review(
                "Дмитрий В.",
                "Санкт-Петербург",
                "Удивительная работа. Текстура масла чувствуется даже на фото. Получил в подарок жене — она была в восторге.",
                3,
                "Прибой",
            ),
            review(
                "Елена К.",
                "Екатеринбург",
                "Давно искала что-то особенное для кабинета. Эта работа именно то — спокойная и при этом живая.",
                5,
                "Горный туман",
            ),
        ];

        Self::new(items, reviews)
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
