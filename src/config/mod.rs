// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[hero]` - Deferred hero mount delay and ASCII video options
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SPEAKER_PAGE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use speaker_page::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.hero.column_count = Some(120);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::ascii::charset::Charset;
use crate::ascii::AsciiVideoConfig;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Hero section settings: when the ASCII video mounts and how it renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HeroConfig {
    /// Delay between page activation and mounting the ASCII video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_delay_ms: Option<u64>,

    /// Site-rooted clip path, e.g. `/hero-clip.mp4`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colored: Option<bool>,

    /// Luminance multiplier (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer_interaction: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ripple_effect: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<Charset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playing: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
}

impl HeroConfig {
    /// Mount delay, clamped to [`MAX_MOUNT_DELAY_MS`].
    #[must_use]
    pub fn mount_delay(&self) -> Duration {
        let millis = self
            .mount_delay_ms
            .unwrap_or(DEFAULT_MOUNT_DELAY_MS)
            .min(MAX_MOUNT_DELAY_MS);
        Duration::from_millis(millis)
    }

    /// Builds the module configuration, filling gaps with the built-in hero
    /// settings and clamping numeric values into their supported ranges.
    #[must_use]
    pub fn ascii_config(&self) -> AsciiVideoConfig {
        let base = AsciiVideoConfig::default();
        AsciiVideoConfig {
            source: self.source.clone().unwrap_or(base.source),
            column_count: self
                .column_count
                .map_or(base.column_count, |count| {
                    count.clamp(MIN_COLUMN_COUNT, MAX_COLUMN_COUNT)
                }),
            color_enabled: self.colored.unwrap_or(base.color_enabled),
            brightness: self.brightness.map_or(base.brightness, |value| {
                if value.is_finite() {
                    value.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS)
                } else {
                    base.brightness
                }
            }),
            pointer_interaction_enabled: self
                .pointer_interaction
                .unwrap_or(base.pointer_interaction_enabled),
            ripple_effect_enabled: self.ripple_effect.unwrap_or(base.ripple_effect_enabled),
            charset: self.charset.unwrap_or(base.charset),
            autoplay: self.autoplay.unwrap_or(base.autoplay),
            playing: self.playing.unwrap_or(base.playing),
            looping: self.looping.unwrap_or(base.looping),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub hero: HeroConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings file ignored");
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
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
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
