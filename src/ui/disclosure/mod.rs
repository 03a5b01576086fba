// SPDX-License-Identifier: MPL-2.0
//! Overlay coordination: detail view, order confirmation, consultation form.

mod controller;
mod scroll_lock;

pub use controller::{ClickTarget, DisclosureController, DisclosureState, OverlayKind};
pub use scroll_lock::ScrollLock;
