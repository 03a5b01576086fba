// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{overlays, sections};
use iced::widget::scrollable::Viewport;
use iced::{window, Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The page and overlay
/// variants forward view messages; the rest come from subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    Page(sections::Message),
    Overlay(overlays::Message),
    /// The page scrollable moved or was resized.
    Scrolled(Viewport),
    CursorMoved(Point),
    Escape,
    Resized(Size),
    /// Display refresh while an animation is running.
    Frame(Instant),
    /// Periodic clock for the consultation trigger.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    CloseRequested(window::Id),
}

/// Runtime flags passed into the application from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `ru`).
    pub lang: Option<String>,
}
