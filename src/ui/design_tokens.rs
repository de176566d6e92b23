// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the speaker page.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Layout sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use speaker_page::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::INK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Page background in dark mode.
    pub const INK: Color = Color::from_rgb(0.04, 0.04, 0.04);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.15, 0.15, 0.15);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.92);
    /// Page background in light mode.
    pub const PAPER: Color = Color::from_rgb(0.98, 0.97, 0.95);

    // Accent (ticker green)
    pub const ACCENT_300: Color = Color::from_rgb(0.45, 0.9, 0.6);
    pub const ACCENT_400: Color = Color::from_rgb(0.3, 0.82, 0.5);
    pub const ACCENT_500: Color = Color::from_rgb(0.2, 0.7, 0.4);
    pub const ACCENT_600: Color = Color::from_rgb(0.14, 0.56, 0.32);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background for cards and the sticky nav bar
    pub const SURFACE: f32 = 0.95;
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
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 96.0; // 12 units, between sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the hero region holding the ASCII video.
    pub const HERO_HEIGHT: f32 = 640.0;

    /// Widest the readable column of text gets.
    pub const CONTENT_MAX_WIDTH: f32 = 1040.0;

    pub const NAV_HEIGHT: f32 = 56.0;

    /// Width of a topic or talk card in the wrapping grids.
    pub const CARD_WIDTH: f32 = 320.0;

    /// Thin rule under each section title.
    pub const DIVIDER_WIDTH: f32 = 48.0;
    pub const DIVIDER_HEIGHT: f32 = 2.0;

    /// Dot separating credibility items.
    pub const DOT: f32 = 4.0;

    /// Fixed width of the date column in the speaking history.
    pub const HISTORY_DATE_WIDTH: f32 = 96.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: the hero name
    //! - Titles: section headings and card titles
    //! - Body: paragraphs and list entries
    //! - Caption: labels, tags and dates

    /// Hero name
    pub const DISPLAY: f32 = 56.0;

    /// Section titles
    pub const TITLE_LG: f32 = 32.0;

    /// Hero tagline, invite title
    pub const TITLE_MD: f32 = 22.0;

    /// Card titles
    pub const TITLE_SM: f32 = 18.0;

    /// Bio and about paragraphs
    pub const BODY_LG: f32 = 17.0;

    pub const BODY: f32 = 15.0;

    pub const BODY_SM: f32 = 13.0;

    /// Section labels, tags, dates
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Card outlines, tags
    pub const WIDTH_SM: f32 = 1.0;

    /// Secondary call-to-action outline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XXXL > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::CARD_WIDTH);
    assert!(sizing::HERO_HEIGHT > sizing::NAV_HEIGHT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
