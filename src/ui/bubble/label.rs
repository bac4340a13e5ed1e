// SPDX-License-Identifier: MPL-2.0
//! The text element owned by a bubble.

use super::configuration::{Configuration, LabelFont, LineBreakMode, TextAlignment};
use iced::Color;

/// Text element displayed inside the bubble.
///
/// A bubble creates exactly one label and keeps it for its whole life;
/// styling is copied in from the bubble's [`Configuration`].
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    font: LabelFont,
    text_color: Color,
    alignment: TextAlignment,
    line_break_mode: LineBreakMode,
    number_of_lines: usize,
}

impl Label {
    pub(super) fn new(config: &Configuration) -> Self {
        Self {
            text: String::new(),
            font: config.label_font,
            text_color: config.label_text_color,
            alignment: config.label_text_alignment,
            line_break_mode: config.label_line_break_mode,
            number_of_lines: config.label_number_of_lines,
        }
    }

    pub(super) fn apply_style(&mut self, config: &Configuration) {
        self.number_of_lines = config.label_number_of_lines;
        self.line_break_mode = config.label_line_break_mode;
        self.font = config.label_font;
        self.text_color = config.label_text_color;
        self.alignment = config.label_text_alignment;
    }

    pub(super) fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn font(&self) -> LabelFont {
        self.font
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    #[must_use]
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    #[must_use]
    pub fn line_break_mode(&self) -> LineBreakMode {
        self.line_break_mode
    }

    /// Maximum number of lines, `0` meaning unlimited.
    #[must_use]
    pub fn number_of_lines(&self) -> usize {
        self.number_of_lines
    }

    /// Returns the line limit, or `None` when unlimited.
    #[must_use]
    pub fn line_limit(&self) -> Option<usize> {
        (self.number_of_lines > 0).then_some(self.number_of_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_label_is_empty_and_styled() {
        let config = Configuration::default();
        let label = Label::new(&config);

        assert_eq!(label.text(), "");
        assert_eq!(label.font(), config.label_font);
        assert_eq!(label.text_color(), config.label_text_color);
        assert_eq!(label.alignment(), config.label_text_alignment);
        assert_eq!(label.line_break_mode(), config.label_line_break_mode);
        assert_eq!(label.number_of_lines(), config.label_number_of_lines);
    }

    #[test]
    fn apply_style_keeps_text() {
        let mut label = Label::new(&Configuration::default());
        label.set_text("Hello");

        let config = Configuration {
            label_text_alignment: TextAlignment::Left,
            ..Configuration::default()
        };
        label.apply_style(&config);

        assert_eq!(label.text(), "Hello");
        assert_eq!(label.alignment(), TextAlignment::Left);
    }

    #[test]
    fn line_limit_is_none_for_zero() {
        let mut label = Label::new(&Configuration::default());
        assert_eq!(label.line_limit(), None);

        label.apply_style(&Configuration {
            label_number_of_lines: 3,
            ..Configuration::default()
        });
        assert_eq!(label.line_limit(), Some(3));
    }
}
