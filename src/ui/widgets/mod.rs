// SPDX-License-Identifier: MPL-2.0
pub mod cursor_markers;
pub mod light_spot;
pub mod scroll_lock_layer;

pub use cursor_markers::CursorMarkers;
pub use light_spot::LightSpotLayer;
pub use scroll_lock_layer::{scroll_lock_layer, ScrollLockLayer};
