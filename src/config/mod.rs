// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[bubble]` - Style overrides applied on top of the default bubble
//!   [`Configuration`]
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `INFO_BUBBLE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use info_bubble::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.bubble.corner_radius = Some(8.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, MarkupError, Result};
use crate::ui::bubble::{Configuration, FontFamily, FontWeight, LineBreakMode, TextAlignment};
use crate::ui::theming::ThemeMode;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Declarative bubble style.
///
/// Every field is optional; missing fields keep the value of the
/// configuration the style is applied to. Colors are hex strings
/// (`#rgb`, `#rrggbb` or `#rrggbbaa`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BubbleStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_font_family: Option<FontFamily>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_font_weight: Option<FontWeight>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_font_size: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_text_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_text_alignment: Option<TextAlignment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_line_break_mode: Option<LineBreakMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_number_of_lines: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_hide: Option<bool>,

    /// Seconds before the automatic hide; negative values mean "immediately".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_hide_after_secs: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_remove_from_host: Option<bool>,
}

impl BubbleStyle {
    /// Returns `base` with every field set in this style overridden.
    pub fn apply_to(&self, base: Configuration) -> Result<Configuration> {
        let mut config = base;

        if let Some(raw) = &self.background_color {
            config.background_color = parse_hex_color(raw)?;
        }
        if let Some(radius) = self.corner_radius {
            config.corner_radius = radius;
        }
        if let Some(family) = self.label_font_family {
            config.label_font.family = family;
        }
        if let Some(weight) = self.label_font_weight {
            config.label_font.weight = weight;
        }
        if let Some(size) = self.label_font_size {
            config.label_font.size = size;
        }
        if let Some(raw) = &self.label_text_color {
            config.label_text_color = parse_hex_color(raw)?;
        }
        if let Some(alignment) = self.label_text_alignment {
            config.label_text_alignment = alignment;
        }
        if let Some(mode) = self.label_line_break_mode {
            config.label_line_break_mode = mode;
        }
        if let Some(lines) = self.label_number_of_lines {
            config.label_number_of_lines = lines;
        }
        if let Some(auto_hide) = self.auto_hide {
            config.auto_hide = auto_hide;
        }
        if let Some(secs) = self.auto_hide_after_secs {
            config.number_of_seconds_to_auto_hide = seconds_to_duration(secs);
        }
        if let Some(auto_remove) = self.auto_remove_from_host {
            config.auto_remove_from_host = auto_remove;
        }

        Ok(config)
    }

    /// Returns a style that sets every field from `config`.
    #[must_use]
    pub fn from_configuration(config: &Configuration) -> Self {
        Self {
            background_color: Some(format_hex_color(config.background_color)),
            corner_radius: Some(config.corner_radius),
            label_font_family: Some(config.label_font.family),
            label_font_weight: Some(config.label_font.weight),
            label_font_size: Some(config.label_font.size),
            label_text_color: Some(format_hex_color(config.label_text_color)),
            label_text_alignment: Some(config.label_text_alignment),
            label_line_break_mode: Some(config.label_line_break_mode),
            label_number_of_lines: Some(config.label_number_of_lines),
            auto_hide: Some(config.auto_hide),
            auto_hide_after_secs: Some(config.number_of_seconds_to_auto_hide.as_secs_f64()),
            auto_remove_from_host: Some(config.auto_remove_from_host),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Style overrides for the demo bubbles.
    #[serde(default)]
    pub bubble: BubbleStyle,
}

impl Config {
    /// Default bubble configuration with the `[bubble]` overrides applied.
    pub fn bubble_configuration(&self) -> Result<Configuration> {
        self.bubble.apply_to(Configuration::default())
    }
}

// =============================================================================
// Value Conversion
// =============================================================================

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` into a color.
pub fn parse_hex_color(raw: &str) -> std::result::Result<Color, MarkupError> {
    let invalid = || MarkupError::InvalidColor(raw.to_string());
    let hex = raw.trim().strip_prefix('#').ok_or_else(invalid)?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    match hex.len() {
        3 => {
            let expand = |i: usize| channel(i..i + 1).map(|v| v * 17);
            Ok(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            f32::from(channel(6..8)?) / 255.0,
        )),
        _ => Err(invalid()),
    }
}

/// Formats a color as `#rrggbb`, or `#rrggbbaa` when not opaque.
#[must_use]
pub fn format_hex_color(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Converts seconds to a duration.
///
/// Negative values and NaN become zero; values too large for a `Duration`
/// saturate to [`Duration::MAX`].
#[must_use]
pub fn seconds_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(if secs > 0.0 {
        Duration::MAX
    } else {
        Duration::ZERO
    })
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (Config::default(), Some(format!("{err}")));
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

// =============================================================================
// Save Functions
// =============================================================================

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

// =============================================================================
// Tests
// =============================================================================
