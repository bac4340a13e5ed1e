// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared colors and spacing for the bubble and the demo screens.

## Organization

- **Palette**: Base colors, including the bubble defaults
- **Opacity**: Fully transparent / fully opaque bounds
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale

## Examples

```
use info_bubble::ui::design_tokens::{palette, spacing};
use iced::Color;

let faded = Color {
    a: 0.5,
    ..palette::BUBBLE_BACKGROUND
};
assert!(faded.a < palette::BUBBLE_BACKGROUND.a);

let padding = spacing::MD; // 16px
assert!(padding > spacing::XS);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Default bubble background, a very dark red-brown.
    pub const BUBBLE_BACKGROUND: Color = Color::from_rgb8(28, 13, 13);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - Screen headings
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Event log lines
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
