// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI strings come from Fluent bundles embedded at build time. Russian is the
//! default; English is shipped alongside it.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Region-tolerant matching (`ru-RU` resolves to `ru`)
//! - Fallback to the default locale when nothing matches

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};
