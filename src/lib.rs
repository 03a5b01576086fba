// SPDX-License-Identifier: MPL-2.0
//! `artefact` is a single-page gallery for original paintings built with the
//! Iced GUI framework.
//!
//! The presentation is static content; the interesting parts are the motion
//! and disclosure pieces: a damped pointer follower, one-shot reveal of page
//! blocks, a delayed consultation prompt, a scroll-boundary affordance, and
//! coordination of the overlays with scroll locking. Those live in
//! [`ui::state`] and [`ui::disclosure`] and are driven by the host clock, so
//! they can be exercised without a window.

#![doc(html_root_url = "https://docs.rs/artefact/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod notifier;
pub mod ui;
