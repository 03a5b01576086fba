// SPDX-License-Identifier: MPL-2.0
//! Order deep links into the external chat service.
//!
//! Building a link makes no network call. Opening it is handed to the
//! platform's URL opener, which shows it in a new browser window or tab.

use super::message::order_text;
use crate::catalog::CatalogItem;
use crate::config::NotifierConfig;
use crate::error::{Error, Result};
use std::process::{Command, Stdio};

/// Builds `https://<chat-service>/<handle>?text=<encoded order message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLink {
    base_url: String,
    handle: String,
}

impl OrderLink {
    pub fn new(base_url: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            handle: handle.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &NotifierConfig) -> Self {
        Self::new(&config.chat_base_url, &config.chat_handle)
    }

    /// Deep link pre-filled with the order message for `item`.
    #[must_use]
    pub fn for_item(&self, item: &CatalogItem) -> String {
        self.with_text(&order_text(&item.title, item.price))
    }

    /// Deep link pre-filled with an arbitrary message.
    #[must_use]
    pub fn with_text(&self, text: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.handle.trim_matches('/'),
            urlencoding::encode(text)
        )
    }
}

/// Opens `url` with the desktop's default handler without waiting for it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the opener process could not be spawned.
pub fn open_in_browser(url: &str) -> Result<()> {
    let mut command = opener_command(url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_child| ())
        .map_err(Error::from)
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AspectClass, Price};

    fn item(title: &str, price: u32) -> CatalogItem {
        CatalogItem {
            id: 1,
            title: title.to_string(),
            description: String::new(),
            preview_image: String::new(),
            process_media_ref: String::new(),
            price: Price::new(price),
            old_price: Price::new(price * 2),
            aspect_class: AspectClass::Square,
        }
    }

    #[test]
    fn link_percent_encodes_order_message() {
        let link = OrderLink::new("https://t.me", "artefact_gallery");
        let url = link.for_item(&item("X", 9_900));

        let (base, query) = url.split_once("?text=").expect("query present");
        assert_eq!(base, "https://t.me/artefact_gallery");
        assert_eq!(
            urlencoding::decode(query).expect("valid utf-8"),
            "Хочу заказать картину \"X\" за 9\u{a0}900 ₽"
        );
        assert!(query.contains("9%C2%A0900%20%E2%82%BD"));
        assert!(!query.contains(' '));
        assert!(!query.contains('"'));
    }

    #[test]
    fn trailing_slashes_are_normalised() {
        let link = OrderLink::new("https://wa.me/", "/79000000000/");
        assert_eq!(link.with_text("hi"), "https://wa.me/79000000000?text=hi");
    }

    #[test]
    fn from_config_uses_notifier_section() {
        let config = NotifierConfig::default();
        let link = OrderLink::from_config(&config);
        assert!(link
            .with_text("a b")
            .starts_with(&format!("{}/{}?text=a%20b", config.chat_base_url, config.chat_handle)));
    }
}
