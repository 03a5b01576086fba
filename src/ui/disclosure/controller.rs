// SPDX-License-Identifier: MPL-2.0
//! Which overlays are open, and everything that opens or closes them.
//!
//! The three overlay flags are independent: the consultation form can sit on
//! top of the detail view, and the order overlay is not closed when the
//! detail view is. Only the detail overlay holds the [`ScrollLock`]; the
//! order and consultation overlays leave page scrolling alone.

use super::scroll_lock::ScrollLock;
use crate::catalog::CatalogItem;
use crate::error::{NotifyError, Result};
use crate::notifier::{ContactChannel, ContactMessage, Delivery, OrderLink};
use chrono::NaiveDateTime;

/// The overlay surfaces the page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Detail,
    Order,
    Consultation,
}

/// What a click inside an overlay landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the panel.
    Backdrop,
    /// The panel itself or anything inside it.
    Content,
}

/// Aggregate of the open overlays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisclosureState {
    pub detail_item: Option<CatalogItem>,
    pub order_open: bool,
    pub consultation_open: bool,
}

impl DisclosureState {
    #[must_use]
    pub fn is_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Detail => self.detail_item.is_some(),
            OverlayKind::Order => self.order_open,
            OverlayKind::Consultation => self.consultation_open,
        }
    }

    #[must_use]
    pub fn any_open(&self) -> bool {
        self.detail_item.is_some() || self.order_open || self.consultation_open
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisclosureController {
    state: DisclosureState,
    scroll_lock: ScrollLock,
    escape_bound: bool,
    process_playing: bool,
}

impl DisclosureController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `item` in the detail overlay, replacing any item already shown.
    pub fn select_item(&mut self, item: CatalogItem) {
        tracing::debug!(item = item.id, "detail overlay opened");
        self.state.detail_item = Some(item);
        self.process_playing = false;
        self.scroll_lock.acquire(OverlayKind::Detail);
        self.escape_bound = true;
    }

    /// Closes the detail overlay. The order overlay is left as it is.
    pub fn close_detail(&mut self) -> bool {
        if self.state.detail_item.take().is_none() {
            return false;
        }
        tracing::debug!(order_open = self.state.order_open, "detail overlay closed");
        self.process_playing = false;
        self.scroll_lock.release(OverlayKind::Detail);
        self.escape_bound = false;
        true
    }

    /// Opens the order overlay for the item in the detail view. Ignored when
    /// no item is selected.
    pub fn open_order(&mut self) -> bool {
        if self.state.detail_item.is_none() {
            tracing::debug!("order requested without a selected item");
            return false;
        }
        self.state.order_open = true;
        tracing::debug!("order overlay opened");
        true
    }

    pub fn close_order(&mut self) -> bool {
        if !self.state.order_open {
            return false;
        }
        self.state.order_open = false;
        tracing::debug!("order overlay closed");
        true
    }

    /// Opens the consultation form on top of whatever else is showing.
    pub fn open_consultation(&mut self) {
        self.state.consultation_open = true;
        tracing::debug!("consultation overlay opened");
    }

    pub fn close_consultation(&mut self) -> bool {
        if !self.state.consultation_open {
            return false;
        }
        self.state.consultation_open = false;
        tracing::debug!("consultation overlay closed");
        true
    }

    /// Closes `kind` if it is open.
    pub fn close(&mut self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Detail => self.close_detail(),
            OverlayKind::Order => self.close_order(),
            OverlayKind::Consultation => self.close_consultation(),
        }
    }

    /// A click on `kind`'s overlay closes it only when it hit the backdrop.
    pub fn on_backdrop_click(&mut self, kind: OverlayKind, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => self.close(kind),
            ClickTarget::Content => false,
        }
    }

    /// Escape closes the detail overlay and nothing else.
    pub fn on_escape(&mut self) -> bool {
        if !self.escape_bound {
            return false;
        }
        self.close_detail()
    }

    /// Starts the process clip in the detail overlay.
    pub fn play_process(&mut self) -> bool {
        if self.state.detail_item.is_none() || self.process_playing {
            return false;
        }
        self.process_playing = true;
        true
    }

    /// Deep link for ordering the item in the detail view.
    #[must_use]
    pub fn order_link(&self, link: &OrderLink) -> Option<String> {
        self.state.detail_item.as_ref().map(|item| link.for_item(item))
    }

    /// Sends a callback request from the form in `origin` and closes it.
    ///
    /// A request from the order overlay carries the selected item's title.
    /// The returned [`Delivery`] is meant to be detached; the overlay is
    /// already closed when this returns, whatever the network does later.
    ///
    /// # Errors
    ///
    /// [`NotifyError::OverlayClosed`] if `origin` has no form or is not open,
    /// [`NotifyError::EmptyPhone`] if `phone` is blank. Nothing is closed in
    /// either case.
    pub fn submit_contact<C: ContactChannel + ?Sized>(
        &mut self,
        origin: OverlayKind,
        phone: &str,
        channel: &C,
        submitted_at: NaiveDateTime,
    ) -> Result<Delivery> {
        if origin == OverlayKind::Detail || !self.state.is_open(origin) {
            return Err(NotifyError::OverlayClosed.into());
        }
        let item_title = match origin {
            OverlayKind::Order => self.state.detail_item.as_ref().map(|item| item.title.as_str()),
            _ => None,
        };
        let message = ContactMessage::new(phone, item_title, submitted_at)?;
        tracing::info!(?origin, "contact request submitted");

        let delivery = channel.dispatch(message);
        self.close(origin);
        Ok(delivery)
    }

    /// Releases everything held, as on unmount.
    pub fn teardown(&mut self) {
        self.scroll_lock.release_all();
        self.escape_bound = false;
        self.process_playing = false;
        self.state = DisclosureState::default();
        tracing::debug!("disclosure torn down");
    }

    #[must_use]
    pub fn state(&self) -> &DisclosureState {
        &self.state
    }

    #[must_use]
    pub fn detail_item(&self) -> Option<&CatalogItem> {
        self.state.detail_item.as_ref()
    }

    #[must_use]
    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.state.is_open(kind)
    }

    #[must_use]
    pub fn is_process_playing(&self) -> bool {
        self.process_playing
    }

    #[must_use]
    pub fn is_escape_bound(&self) -> bool {
        self.escape_bound
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    #[must_use]
    pub fn scroll_lock_count(&self) -> usize {
        self.scroll_lock.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AspectClass, Price};
    use crate::error::Error;
    use futures_util::FutureExt;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingChannel {
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl ContactChannel for RecordingChannel {
        fn dispatch(&self, message: ContactMessage) -> Delivery {
            self.sent.borrow_mut().push(message);
            async {}.boxed()
        }
    }

    fn item(title: &str, price: u32) -> CatalogItem {
        CatalogItem {
            id: 7,
            title: title.to_string(),
            description: String::new(),
            preview_image: String::new(),
            process_media_ref: String::new(),
            price: Price::new(price),
            old_price: Price::new(price + 1_000),
            aspect_class: AspectClass::Landscape,
        }
    }

    fn stamp() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2024, 5, 6)
            .and_then(|date| date.and_hms_opt(7, 8, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn escape_closes_detail_then_is_a_no_op() {
        let mut controller = DisclosureController::new();
        controller.select_item(item("A", 100));
        assert!(controller.is_escape_bound());

        assert!(controller.on_escape());
        assert!(controller.detail_item().is_none());

        let before = controller.state().clone();
        assert!(!controller.on_escape());
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.scroll_lock_count(), 0);
    }

    #[test]
    fn escape_leaves_consultation_open() {
        let mut controller = DisclosureController::new();
        controller.select_item(item("A", 100));
        controller.open_consultation();

        controller.on_escape();
        assert!(controller.is_open(OverlayKind::Consultation));
    }

    #[test]
    fn quirk_order_survives_close_detail() {
        let mut controller = DisclosureController::new();
        controller.select_item(item("A", 100));
        assert!(controller.open_order());

        controller.close_detail();
        assert!(controller.state().order_open);
        assert!(controller.detail_item().is_none());
        assert_eq!(controller.scroll_lock_count(), 0);
    }

    #[test]
    fn consultation_alone_keeps_page_scrollable() {
        let mut controller = DisclosureController::new();
        controller.open_consultation();
        assert!(controller.is_open(OverlayKind::Consultation));
        assert_eq!(controller.scroll_lock_count(), 0);
    }

    #[test]
    fn only_the_detail_overlay_holds_the_lock() {
        let mut controller = DisclosureController::new();
        controller.select_item(item("A", 100));
        controller.open_order();
        controller.open_consultation();
        assert_eq!(controller.scroll_lock_count(), 1);

        controller.close_consultation();
        controller.close_order();
        assert!(controller.is_scroll_locked());

        controller.close_detail();
        assert_eq!(controller.scroll_lock_count(), 0);
    }

    #[test]
    fn open_order_requires_a_selected_item() {
        let mut controller = DisclosureController::new();
        assert!(!controller.open_order());
        assert!(!controller.state().order_open);
    }

    #[test]
    fn reselecting_does_not_double_lock() {
        let mut controller = DisclosureController::new();
        controller.select_item(item("A", 100));
        controller.select_item(item("B", 200));
        assert_eq!(controller.scroll_lock_count(), 1);
        assert_eq!(controller.detail_item().map(|i| i.title.as_str()), Some("B"));

        controller.close_detail();
        assert_eq!(controller.scroll_lock_count(), 0);
    }

    #[test]
    fn backdrop_clicks_close_only_on_backdrop() {
        let mut controller = DisclosureController::new();
        controller.select_item(item("A", 100));
        controller.open_order();
        controller.open_consultation();

        assert!(!controller.on_backdrop_click(OverlayKind::Detail, ClickTarget::Content));
        assert!(controller.is_open(OverlayKind::Detail));

        assert!(controller.on_backdrop_click(OverlayKind::Consultation, ClickTarget::Backdrop));
        assert!(controller.on_backdrop_click(OverlayKind::Order, ClickTarget::Backdrop));
        assert!(controller.on_backdrop_click(OverlayKind::Detail, ClickTarget::Backdrop));
        assert!(!controller.state().any_open());
        assert_eq!(controller.scroll_lock_count(), 0);
    }

    #[test]
    fn process_playback_resets_on_every_selection() {
        let mut controller = DisclosureController::new();
        assert!(!controller.play_process());

        controller.select_item(item("A", 100));
        assert!(controller.play_process());
        assert!(controller.is_process_playing());

        controller.select_item(item("B", 100));
        assert!(!controller.is_process_playing());
    }

    #[test]
    fn order_link_follows_selected_item() {
        let link = OrderLink::new("https://t.me", "gallery");
        let mut controller = DisclosureController::new();
        assert_eq!(controller.order_link(&link), None);

        controller.select_item(item("X", 9_900));
        let url = controller.order_link(&link).expect("item selected");
        let (_, query) = url.split_once("?text=").expect("query");
        assert_eq!(
            urlencoding::decode(query).expect("utf-8"),
            "Хочу заказать картину \"X\" за 9\u{a0}900 ₽"
        );
    }

    #[test]
    fn consultation_submission_closes_form() {
        let channel = RecordingChannel::default();
        let mut controller = DisclosureController::new();
        controller.open_consultation();

        let delivery = controller
            .submit_contact(OverlayKind::Consultation, " +7 900 ", &channel, stamp())
            .expect("accepted");
        drop(delivery);

        assert!(!controller.is_open(OverlayKind::Consultation));
        let sent = channel.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].phone(), "+7 900");
        assert_eq!(sent[0].item_title(), None);
    }

    #[test]
    fn order_submission_carries_title_and_keeps_detail() {
        let channel = RecordingChannel::default();
        let mut controller = DisclosureController::new();
        controller.select_item(item("Прибой", 100));
        controller.open_order();

        let _delivery = controller
            .submit_contact(OverlayKind::Order, "123", &channel, stamp())
            .expect("accepted");

        assert!(!controller.state().order_open);
        assert!(controller.is_open(OverlayKind::Detail));
        assert_eq!(channel.sent.borrow()[0].item_title(), Some("Прибой"));
    }

    #[test]
    fn blank_phone_is_rejected_without_closing() {
        let channel = RecordingChannel::default();
        let mut controller = DisclosureController::new();
        controller.open_consultation();

        let result = controller.submit_contact(OverlayKind::Consultation, "   ", &channel, stamp());
        assert!(matches!(result, Err(Error::Notify(NotifyError::EmptyPhone))));
        assert!(controller.is_open(OverlayKind::Consultation));
        assert!(channel.sent.borrow().is_empty());
    }

    #[test]
    fn submission_from_closed_overlay_is_rejected() {
        let channel = RecordingChannel::default();
        let mut controller = DisclosureController::new();

        let result = controller.submit_contact(OverlayKind::Order, "123", &channel, stamp());
        assert!(matches!(result, Err(Error::Notify(NotifyError::OverlayClosed))));
    }

    #[test]
    fn teardown_releases_every_hold() {
        let mut controller = DisclosureController::new();
        controller.select_item(item("A", 100));
        controller.open_order();
        controller.open_consultation();
        assert_eq!(controller.scroll_lock_count(), 1);

        controller.teardown();
        assert_eq!(controller.scroll_lock_count(), 0);
        assert!(!controller.is_escape_bound());
        assert!(!controller.state().any_open());
    }
}
