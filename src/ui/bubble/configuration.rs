// SPDX-License-Identifier: MPL-2.0
//! Appearance and behavior options for an [`InfoBubble`](super::InfoBubble).
//!
//! A `Configuration` is a plain value: copy it, tweak the fields you care
//! about and hand it to the bubble. Nothing is validated; a negative corner
//! radius or a zero auto-hide delay is passed through as-is.

use crate::config::defaults::{
    DEFAULT_AUTO_HIDE_MS, DEFAULT_CORNER_RADIUS, DEFAULT_LABEL_FONT_SIZE,
    DEFAULT_LABEL_NUMBER_OF_LINES,
};
use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::{alignment, font, Color, Font};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Font family of the bubble label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// Platform sans-serif font.
    #[default]
    System,
    Serif,
    Monospace,
}

/// Font weight of the bubble label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Semibold,
    Bold,
}

/// Font used by the bubble label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFont {
    pub family: FontFamily,
    pub weight: FontWeight,
    /// Size in logical pixels.
    pub size: f32,
}

impl LabelFont {
    /// Regular system font of the given size.
    #[must_use]
    pub const fn system(size: f32) -> Self {
        Self {
            family: FontFamily::System,
            weight: FontWeight::Regular,
            size,
        }
    }

    /// Bold system font of the given size.
    #[must_use]
    pub const fn bold_system(size: f32) -> Self {
        Self {
            family: FontFamily::System,
            weight: FontWeight::Bold,
            size,
        }
    }

    /// Converts to the `iced` font descriptor (size is applied separately).
    #[must_use]
    pub fn to_font(self) -> Font {
        let family = match self.family {
            FontFamily::System => font::Family::SansSerif,
            FontFamily::Serif => font::Family::Serif,
            FontFamily::Monospace => font::Family::Monospace,
        };
        let weight = match self.weight {
            FontWeight::Light => font::Weight::Light,
            FontWeight::Regular => font::Weight::Normal,
            FontWeight::Semibold => font::Weight::Semibold,
            FontWeight::Bold => font::Weight::Bold,
        };

        Font {
            family,
            weight,
            ..Font::default()
        }
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self::system(DEFAULT_LABEL_FONT_SIZE)
    }
}

/// Horizontal alignment of the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl From<TextAlignment> for alignment::Horizontal {
    fn from(value: TextAlignment) -> Self {
        match value {
            TextAlignment::Left => alignment::Horizontal::Left,
            TextAlignment::Center => alignment::Horizontal::Center,
            TextAlignment::Right => alignment::Horizontal::Right,
        }
    }
}

/// How the label breaks text that does not fit on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordWrapping,
    /// Wrap at any glyph.
    CharWrapping,
    /// Never wrap; overflow is clipped.
    Clipping,
}

impl From<LineBreakMode> for text::Wrapping {
    fn from(value: LineBreakMode) -> Self {
        match value {
            LineBreakMode::WordWrapping => text::Wrapping::Word,
            LineBreakMode::CharWrapping => text::Wrapping::Glyph,
            LineBreakMode::Clipping => text::Wrapping::None,
        }
    }
}

/// Style and behavior of an info bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    /// Background color of the bubble.
    pub background_color: Color,
    /// Corner radius of the bubble background.
    pub corner_radius: f32,
    /// Font of the label.
    pub label_font: LabelFont,
    /// Text color of the label.
    pub label_text_color: Color,
    /// Alignment of the label text.
    pub label_text_alignment: TextAlignment,
    /// Line breaking of the label text.
    pub label_line_break_mode: LineBreakMode,
    /// Maximum number of label lines, `0` for unlimited.
    pub label_number_of_lines: usize,
    /// Hide automatically once fully shown.
    pub auto_hide: bool,
    /// How long the bubble stays visible before the automatic hide starts.
    pub number_of_seconds_to_auto_hide: Duration,
    /// Detach from the host once a hide completes.
    pub auto_remove_from_host: bool,
}

impl Configuration {
    /// Creates a configuration with every field given explicitly.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        background_color: Color,
        corner_radius: f32,
        label_font: LabelFont,
        label_text_color: Color,
        label_text_alignment: TextAlignment,
        label_line_break_mode: LineBreakMode,
        label_number_of_lines: usize,
        auto_hide: bool,
        number_of_seconds_to_auto_hide: Duration,
        auto_remove_from_host: bool,
    ) -> Self {
        Self {
            background_color,
            corner_radius,
            label_font,
            label_text_color,
            label_text_alignment,
            label_line_break_mode,
            label_number_of_lines,
            auto_hide,
            number_of_seconds_to_auto_hide,
            auto_remove_from_host,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            background_color: palette::BUBBLE_BACKGROUND,
            corner_radius: DEFAULT_CORNER_RADIUS,
            label_font: LabelFont::default(),
            label_text_color: palette::WHITE,
            label_text_alignment: TextAlignment::Center,
            label_line_break_mode: LineBreakMode::WordWrapping,
            label_number_of_lines: DEFAULT_LABEL_NUMBER_OF_LINES,
            auto_hide: true,
            number_of_seconds_to_auto_hide: Duration::from_millis(DEFAULT_AUTO_HIDE_MS),
            auto_remove_from_host: false,
        }
    }
}
