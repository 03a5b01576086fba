// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Motion and scroll state kept apart from the App struct. Nothing here
//! draws; views read these types and the app feeds them events.

pub mod light_follow;
pub mod pointer_follow;
pub mod reveal;
pub mod scroll_boundary;
pub mod smooth_scroll;
pub mod timed_trigger;
pub mod viewport;

pub use light_follow::{CardHover, LightSpot};
pub use pointer_follow::{Damping, FrameScheduler, PointerFollowAnimator, PointerSample};
pub use reveal::{visible_fraction, RevealGroup, RevealOnEnter, RevealState};
pub use scroll_boundary::{anchor_scroll_target, AnchorLocator, ScrollBoundaryWatcher};
pub use smooth_scroll::SmoothScroll;
pub use timed_trigger::TimedTrigger;
pub use viewport::PageViewport;
