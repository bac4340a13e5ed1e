// SPDX-License-Identifier: MPL-2.0
//! Rendering of an [`InfoBubble`] as an `iced` element.
//!
//! `iced` has no per-widget opacity, so the bubble's alpha is multiplied
//! into its background and text colors.

use super::widget::InfoBubble;
use crate::config::defaults::{BUBBLE_PADDING, LABEL_LINE_HEIGHT};
use iced::widget::{container, text, Container, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Renders the bubble, or an empty placeholder when it is hidden.
pub fn view<'a, Message: 'a>(bubble: &'a InfoBubble) -> Element<'a, Message> {
    if bubble.is_hidden() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let alpha = bubble.alpha();
    let label = bubble.label();
    let font = label.font();
    let text_color = with_alpha(label.text_color(), alpha);

    let mut content: Text<'a> = Text::new(label.text())
        .size(font.size)
        .font(font.to_font())
        .line_height(text::LineHeight::Relative(LABEL_LINE_HEIGHT))
        .align_x(iced::alignment::Horizontal::from(label.alignment()))
        .wrapping(label.line_break_mode().into())
        .color(text_color);

    if let Some(height) = max_label_height(bubble) {
        content = content.height(Length::Fixed(height));
    }

    let background = with_alpha(bubble.background_color(), alpha);
    let corner_radius = bubble.corner_radius();

    Container::new(content)
        .padding(BUBBLE_PADDING)
        .clip(true)
        .style(move |theme: &Theme| bubble_container_style(theme, background, corner_radius))
        .into()
}

/// Height of the label when its line count is limited.
#[must_use]
#[allow(clippy::cast_precision_loss)] // line limits are small integers
pub fn max_label_height(bubble: &InfoBubble) -> Option<f32> {
    let label = bubble.label();
    label
        .line_limit()
        .map(|lines| lines as f32 * label.font().size * LABEL_LINE_HEIGHT)
}

/// Scales the alpha channel of a color by `alpha`.
#[must_use]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Style function for the bubble container.
fn bubble_container_style(_theme: &Theme, background: Color, corner_radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: corner_radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::bubble::Configuration;

    #[test]
    fn with_alpha_scales_existing_alpha() {
        let color = Color {
            a: 0.5,
            ..Color::WHITE
        };
        assert_eq!(with_alpha(color, 0.5).a, 0.25);
        assert_eq!(with_alpha(color, 2.0).a, 0.5);
    }

    #[test]
    fn container_style_uses_background_and_radius() {
        let style = bubble_container_style(&Theme::Dark, Color::BLACK, 3.0);
        assert_eq!(style.background, Some(Background::Color(Color::BLACK)));
        assert_eq!(style.border.radius, iced::border::Radius::from(3.0));
    }

    #[test]
    fn unlimited_label_has_no_fixed_height() {
        let bubble = InfoBubble::new();
        assert!(max_label_height(&bubble).is_none());
    }

    #[test]
    fn limited_label_height_scales_with_lines() {
        let bubble = InfoBubble::with_config(Configuration {
            label_number_of_lines: 2,
            ..Configuration::default()
        });
        let height = max_label_height(&bubble).expect("limited");
        assert!((height - 2.0 * 14.0 * LABEL_LINE_HEIGHT).abs() < f32::EPSILON);
    }

    #[test]
    fn view_builds_for_hidden_and_visible_bubbles() {
        let mut bubble = InfoBubble::new();
        bubble.set_label_text("Hello World");
        let _: Element<'_, ()> = view(&bubble);

        bubble.show();
        let _: Element<'_, ()> = view(&bubble);
    }
}
