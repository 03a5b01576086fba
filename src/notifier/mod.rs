// SPDX-License-Identifier: MPL-2.0
//! Boundary to the outside world: contact requests and order deep links.
//!
//! # Components
//!
//! - [`message`] - contact request and order texts
//! - [`client`] - [`ExternalNotifier`], the fire-and-forget HTTP channel
//! - [`deep_link`] - [`OrderLink`] builder and the platform URL opener
//!
//! The disclosure controller consumes these through [`ContactChannel`] and
//! [`OrderLink`]; it never owns them.

pub mod client;
pub mod deep_link;
pub mod message;

pub use client::{ContactChannel, Delivery, ExternalNotifier};
pub use deep_link::{open_in_browser, OrderLink};
pub use message::{order_text, ContactMessage};
