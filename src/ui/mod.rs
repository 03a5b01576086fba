// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern: view
//! functions read borrowed state through a `ViewContext` and emit messages,
//! while the stateful pieces live in [`state`] and [`disclosure`].
//!
//! # Views
//!
//! - [`sections`] - The scrolling page (hero, gallery, reviews, about, footer) and header
//! - [`overlays`] - Item detail, order, consultation, floating affordance
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Host-driven state machines (pointer follower, reveals, timers, scroll)
//! - [`disclosure`] - Overlay coordination and scroll locking
//! - [`page_layout`] - Fixed page geometry used for anchors and reveal rectangles
//! - [`widgets`] - Custom Iced widgets (cursor markers, light spot, scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod disclosure;
pub mod overlays;
pub mod page_layout;
pub mod sections;
pub mod state;
pub mod styles;
pub mod widgets;
