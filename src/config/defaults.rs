// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Motion**: Pointer-follow damping and reveal threshold
//! - **Disclosure**: Delayed consultation prompt
//! - **Scroll**: Boundary anchor and smooth-scroll speed
//! - **Notifier**: Outbound message endpoint and chat deep link

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Fraction of the remaining pointer gap closed per animation frame.
pub const DEFAULT_DAMPING: f32 = 0.08;

/// Smallest accepted damping factor. Zero would freeze the follower.
pub const MIN_DAMPING: f32 = 0.001;

/// Largest accepted damping factor (follower snaps to the pointer).
pub const MAX_DAMPING: f32 = 1.0;

/// Visible fraction of an element required before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.12;

// ==========================================================================
// Disclosure Defaults
// ==========================================================================

/// Delay before the consultation overlay opens on its own (milliseconds).
pub const DEFAULT_CONSULTATION_DELAY_MS: u64 = 30_000;

/// Interval of the clock tick that drives pending timers (milliseconds).
pub const TIMER_TICK_MS: u64 = 250;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Anchor whose top edge toggles the floating affordance.
pub const DEFAULT_BOUNDARY_ANCHOR: &str = "gallery";

/// Anchor targeted by the "to gallery" action.
pub const GALLERY_ANCHOR: &str = "gallery";

/// Fraction of the remaining distance covered per frame by smooth scrolling.
pub const SMOOTH_SCROLL_SPEED: f32 = 0.18;

// ==========================================================================
// Notifier Defaults
// ==========================================================================

/// Outbound message endpoint receiving `{ chat_id, text }`.
pub const DEFAULT_NOTIFIER_ENDPOINT: &str =
    "https://api.telegram.org/bot0000000000:artefact-gallery/sendMessage";

/// Recipient of contact requests.
pub const DEFAULT_CHAT_ID: &str = "-1000000000000";

/// Base of the chat deep link used for orders.
pub const DEFAULT_CHAT_BASE_URL: &str = "https://t.me";

/// Handle appended to the chat base URL.
pub const DEFAULT_CHAT_HANDLE: &str = "artefact_gallery";

/// Attempts made by the optional retrying delivery (first try included).
pub const DELIVERY_MAX_ATTEMPTS: u32 = 3;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DAMPING > 0.0);
    assert!(DEFAULT_DAMPING >= MIN_DAMPING);
    assert!(DEFAULT_DAMPING <= MAX_DAMPING);
    assert!(DEFAULT_REVEAL_THRESHOLD >= 0.0);
    assert!(DEFAULT_REVEAL_THRESHOLD <= 1.0);
    assert!(TIMER_TICK_MS > 0);
    assert!(SMOOTH_SCROLL_SPEED > 0.0);
    assert!(SMOOTH_SCROLL_SPEED < 1.0);
    assert!(DELIVERY_MAX_ATTEMPTS >= 1);
};
