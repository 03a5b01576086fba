// SPDX-License-Identifier: MPL-2.0
//! Message handlers for [`App`].
//!
//! Page and overlay messages are turned into controller calls here; anything
//! that leaves the process (browser hand-off, contact delivery) is started
//! from these handlers and never awaited.

use super::{App, Message, PAGE_SCROLL_ID};
use crate::config::GALLERY_ANCHOR;
use crate::error::Error;
use crate::notifier::open_in_browser;
use crate::ui::disclosure::OverlayKind;
use crate::ui::page_layout::PageLayout;
use crate::ui::state::anchor_scroll_target;
use crate::ui::{overlays, sections};
use iced::widget::operation;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::Id;
use iced::{Size, Task};

/// Scroll reports further than this from the animated offset are user input.
const SCROLL_TOLERANCE: f32 = 1.0;

impl App {
    pub(super) fn handle_page_message(&mut self, message: sections::Message) -> Task<Message> {
        match message {
            sections::Message::SelectItem(id) => {
                match self.catalog.get(id).cloned() {
                    Some(item) => self.disclosure.select_item(item),
                    None => tracing::debug!(id, "selected item is not in the catalog"),
                }
                Task::none()
            }
            sections::Message::CardEntered(id) => {
                self.hovers.entry(id).or_default().enter();
                Task::none()
            }
            sections::Message::CardExited(id) => {
                if let Some(hover) = self.hovers.get_mut(&id) {
                    hover.leave();
                }
                Task::none()
            }
            sections::Message::CardMoved(id, position) => {
                if let Some(slot) = self.layout.card(id) {
                    let size = slot.bounds.size();
                    self.hovers.entry(id).or_default().on_move(position, size);
                }
                Task::none()
            }
            sections::Message::ScrollToGallery => {
                self.scroll_to_gallery();
                Task::none()
            }
            sections::Message::OpenConsultation => {
                self.disclosure.open_consultation();
                Task::none()
            }
        }
    }

    pub(super) fn handle_overlay_message(&mut self, message: overlays::Message) -> Task<Message> {
        match message {
            overlays::Message::Clicked(kind, target) => {
                self.disclosure.on_backdrop_click(kind, target);
            }
            overlays::Message::Close(kind) => {
                self.disclosure.close(kind);
            }
            overlays::Message::PlayProcess => {
                self.disclosure.play_process();
            }
            overlays::Message::OpenOrder => {
                self.disclosure.open_order();
            }
            overlays::Message::OpenChat => self.open_chat(),
            overlays::Message::PhoneChanged(kind, phone) => {
                if let Some(form) = self.forms.get_mut(kind) {
                    form.phone = phone;
                    form.error = None;
                }
            }
            overlays::Message::Submit(kind) => return self.submit_contact(kind),
            overlays::Message::ScrollToGallery => self.scroll_to_gallery(),
            overlays::Message::OpenConsultation => self.disclosure.open_consultation(),
            overlays::Message::DismissNotice => self.notice = None,
        }
        Task::none()
    }

    /// Records a scroll report and recomputes everything derived from it.
    pub(super) fn handle_scrolled(&mut self, offset: f32, size: Size, content_height: f32) {
        if self.smooth_scroll.is_animating()
            && self
                .scroll_target
                .is_some_and(|target| (target - offset).abs() > SCROLL_TOLERANCE)
        {
            tracing::debug!(offset, "smooth scroll interrupted");
            self.smooth_scroll.cancel();
            self.scroll_target = None;
        }
        self.viewport.update(offset, size, content_height);
        self.refresh_scroll_state();
    }

    pub(super) fn handle_resized(&mut self, size: Size) {
        self.layout = PageLayout::compute(size, &self.catalog);
        self.viewport.resize(size);
        self.refresh_scroll_state();
    }

    /// Advances the pointer follower and the smooth scroll by one frame.
    pub(super) fn handle_frame(&mut self) -> Task<Message> {
        self.animator.on_frame();

        match self.smooth_scroll.tick() {
            Some(offset) => {
                self.scroll_target = Some(offset);
                operation::snap_to(
                    Id::new(PAGE_SCROLL_ID),
                    RelativeOffset {
                        x: 0.0,
                        y: self.viewport.relative(offset),
                    },
                )
            }
            None => Task::none(),
        }
    }

    /// Feeds the boundary watcher and the reveal group with the current
    /// viewport.
    pub(super) fn refresh_scroll_state(&mut self) {
        let anchors = self.layout.anchors(self.viewport.offset);
        self.watcher.on_scroll(&anchors);

        let layout = &self.layout;
        let revealed = self
            .reveals
            .observe_all(|target| layout.bounds_of(target), self.viewport.visible_rect());
        if revealed > 0 {
            tracing::debug!(revealed, offset = self.viewport.offset, "blocks revealed");
        }
    }

    fn scroll_to_gallery(&mut self) {
        let offset = self.viewport.offset;
        let anchors = self.layout.anchors(offset);
        let Some(target) = anchor_scroll_target(&anchors, GALLERY_ANCHOR, offset) else {
            tracing::debug!(anchor = GALLERY_ANCHOR, "gallery anchor not found");
            return;
        };
        self.smooth_scroll
            .start(offset, target.min(self.viewport.max_offset()));
    }

    fn open_chat(&mut self) {
        let Some(url) = self.disclosure.order_link(&self.order_link) else {
            return;
        };
        tracing::info!(%url, "opening order chat");
        if let Err(err) = open_in_browser(&url) {
            tracing::warn!(error = %err, "could not open order chat");
            self.notice = Some(self.i18n.tr("notification-link-open-error"));
        }
    }

    fn submit_contact(&mut self, kind: OverlayKind) -> Task<Message> {
        let phone = self
            .forms
            .get(kind)
            .map(|form| form.phone.clone())
            .unwrap_or_default();

        let Some(notifier) = self.notifier.as_ref() else {
            if let Some(form) = self.forms.get_mut(kind) {
                form.error = Some("contact-error-endpoint");
            }
            return Task::none();
        };

        let submitted_at = chrono::Local::now().naive_local();
        match self
            .disclosure
            .submit_contact(kind, &phone, notifier, submitted_at)
        {
            Ok(delivery) => {
                self.forms.reset(kind);
                Task::future(delivery).discard()
            }
            Err(Error::Notify(reason)) => {
                if let Some(form) = self.forms.get_mut(kind) {
                    form.error = Some(reason.i18n_key());
                }
                Task::none()
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                Task::none()
            }
        }
    }
}
