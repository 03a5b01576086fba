// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, stored in a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[motion]` - Pointer-follow damping and reveal threshold
//! - `[disclosure]` - Delayed consultation prompt
//! - `[notifier]` - Outbound message endpoint and order chat deep link
//! - `[scroll]` - Anchor that toggles the floating affordance
//!
//! Every field is optional; missing fields fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use artefact::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! assert!(config.motion.damping() > 0.0);
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "ru", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Pointer-follow and reveal tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    #[serde(default = "default_damping", skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,

    #[serde(
        default = "default_reveal_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_threshold: Option<f32>,
}

impl MotionConfig {
    /// Damping factor, clamped to the supported range.
    pub fn damping(&self) -> f32 {
        self.damping
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_DAMPING)
            .clamp(MIN_DAMPING, MAX_DAMPING)
    }

    /// Reveal threshold, clamped to `0.0..=1.0`.
    pub fn reveal_threshold(&self) -> f32 {
        self.reveal_threshold
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_REVEAL_THRESHOLD)
            .clamp(0.0, 1.0)
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            reveal_threshold: default_reveal_threshold(),
        }
    }
}

/// Overlay disclosure settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisclosureConfig {
    /// Delay before the consultation overlay opens on its own.
    #[serde(
        default = "default_consultation_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub consultation_delay_ms: Option<u64>,
}

impl DisclosureConfig {
    pub fn consultation_delay(&self) -> Duration {
        Duration::from_millis(
            self.consultation_delay_ms
                .unwrap_or(DEFAULT_CONSULTATION_DELAY_MS),
        )
    }
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            consultation_delay_ms: default_consultation_delay_ms(),
        }
    }
}

/// Outbound message and deep-link settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotifierConfig {
    /// Endpoint receiving the `{ chat_id, text }` POST.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Fixed recipient of contact requests.
    #[serde(default = "default_chat_id")]
    pub chat_id: String,

    /// Chat service base URL for order deep links.
    #[serde(default = "default_chat_base_url")]
    pub chat_base_url: String,

    /// Handle appended to `chat_base_url`.
    #[serde(default = "default_chat_handle")]
    pub chat_handle: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            chat_id: default_chat_id(),
            chat_base_url: default_chat_base_url(),
            chat_handle: default_chat_handle(),
        }
    }
}

/// Scroll boundary settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// Anchor whose top edge toggles the floating affordance.
    #[serde(default = "default_boundary_anchor")]
    pub boundary_anchor: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            boundary_anchor: default_boundary_anchor(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub motion: MotionConfig,

    #[serde(default)]
    pub disclosure: DisclosureConfig,

    #[serde(default)]
    pub notifier: NotifierConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_damping() -> Option<f32> {
    Some(DEFAULT_DAMPING)
}

fn default_reveal_threshold() -> Option<f32> {
    Some(DEFAULT_REVEAL_THRESHOLD)
}

fn default_consultation_delay_ms() -> Option<u64> {
    Some(DEFAULT_CONSULTATION_DELAY_MS)
}

fn default_endpoint() -> String {
    DEFAULT_NOTIFIER_ENDPOINT.to_string()
}

fn default_chat_id() -> String {
    DEFAULT_CHAT_ID.to_string()
}

fn default_chat_base_url() -> String {
    DEFAULT_CHAT_BASE_URL.to_string()
}

fn default_chat_handle() -> String {
    DEFAULT_CHAT_HANDLE.to_string()
}

fn default_boundary_anchor() -> String {
    DEFAULT_BOUNDARY_ANCHOR.to_string()
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config load failed, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = config_path_with_override(None) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        config.motion.damping = Some(0.2);
        config.disclosure.consultation_delay_ms = Some(5_000);
        config.notifier.chat_handle = "studio".to_string();

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[motion\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[notifier]\nchat_handle = \"atelier\"\n")
            .expect("partial config should parse");

        assert_eq!(config.notifier.chat_handle, "atelier");
        assert_eq!(config.notifier.chat_base_url, DEFAULT_CHAT_BASE_URL);
        assert_eq!(config.motion.damping(), DEFAULT_DAMPING);
        assert_eq!(
            config.disclosure.consultation_delay(),
            Duration::from_millis(DEFAULT_CONSULTATION_DELAY_MS)
        );
    }

    #[test]
    fn motion_values_are_clamped() {
        let motion = MotionConfig {
            damping: Some(4.0),
            reveal_threshold: Some(-1.0),
        };
        assert_eq!(motion.damping(), MAX_DAMPING);
        assert_eq!(motion.reveal_threshold(), 0.0);

        let motion = MotionConfig {
            damping: Some(f32::NAN),
            reveal_threshold: None,
        };
        assert_eq!(motion.damping(), DEFAULT_DAMPING);
        assert_eq!(motion.reveal_threshold(), DEFAULT_REVEAL_THRESHOLD);
    }
}
