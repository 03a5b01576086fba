// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every visual constant of the gallery page lives here.

## Organization

- **Palette**: Base colors (ivory canvas, charcoal ink, gold accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Fixed page geometry and component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use artefact::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::CHARCOAL
};

let padding = spacing::MD; // 16px
```

## Modification

Section heights in [`sizing`] feed the page layout that anchors and reveal
blocks are computed from. Views and layout must read the same constants.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Canvas and ink
    pub const IVORY: Color = Color::from_rgb(0.980, 0.969, 0.941); // hsl(40 30% 97%)
    pub const PAPER: Color = Color::from_rgb(0.953, 0.937, 0.902);
    pub const LINE: Color = Color::from_rgb(0.898, 0.882, 0.851); // hsl(40 15% 88%)
    pub const CHARCOAL: Color = Color::from_rgb(0.115, 0.104, 0.085); // hsl(30 15% 10%)
    pub const MUTED: Color = Color::from_rgb(0.47, 0.44, 0.40);

    // Accent (gold scale)
    pub const GOLD_300: Color = Color::from_rgb(0.91, 0.80, 0.56);
    pub const GOLD_500: Color = Color::from_rgb(0.77, 0.62, 0.33);
    pub const GOLD_700: Color = Color::from_rgb(0.58, 0.45, 0.22);

    // Placeholder tones for paintings without loaded artwork
    pub const ARTWORK_WARM: Color = Color::from_rgb(0.72, 0.60, 0.43);
    pub const ARTWORK_COOL: Color = Color::from_rgb(0.52, 0.58, 0.60);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.80, 0.25, 0.21);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const BACKDROP: f32 = 0.75;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Fixed header over scrolled content
    pub const HEADER: f32 = 0.85;

    /// Light-follow glow at its brightest point
    pub const LIGHT_SPOT: f32 = 0.35;

    /// Lazy cursor glow
    pub const CURSOR_GLOW: f32 = 0.25;
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
    pub const XXXL: f32 = 96.0; // 12 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Page geometry
    pub const HEADER_HEIGHT: f32 = 72.0;
    pub const PAGE_PADDING_X_MAX: f32 = 80.0;
    pub const PAGE_PADDING_X_MIN: f32 = 24.0;
    pub const SECTION_PADDING_Y: f32 = 96.0;
    pub const SECTION_HEADING_HEIGHT: f32 = 120.0;
    pub const HERO_MIN_HEIGHT: f32 = 560.0;
    pub const GALLERY_GAP: f32 = 24.0;
    pub const GALLERY_ROW_MAX: f32 = 420.0;
    pub const REVIEW_CARD_HEIGHT: f32 = 380.0;
    pub const ABOUT_BLOCK_HEIGHT: f32 = 300.0;
    pub const FOOTER_HEIGHT: f32 = 96.0;

    // Cursor markers
    pub const CURSOR_DOT: f32 = 6.0;
    pub const CURSOR_GLOW: f32 = 36.0;

    // Overlays
    pub const DETAIL_WIDTH: f32 = 960.0;
    pub const DIALOG_WIDTH: f32 = 440.0;
    pub const PROCESS_HEIGHT: f32 = 360.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 44.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the page hierarchy.
    //!
    //! - Display: hero headline
    //! - Titles: section and overlay headings
    //! - Body: paragraphs and labels
    //! - Caption: eyebrows, hints, footer

    use iced::font::{Family, Font, Style};

    /// Headings and prices.
    pub const SERIF: Font = Font {
        family: Family::Serif,
        ..Font::DEFAULT
    };

    /// Footer tagline.
    pub const SERIF_ITALIC: Font = Font {
        family: Family::Serif,
        style: Style::Italic,
        ..Font::DEFAULT
    };

    /// Hero headline
    pub const DISPLAY: f32 = 56.0;

    /// Section headings, price in the detail view
    pub const TITLE_LG: f32 = 40.0;

    /// Overlay headings
    pub const TITLE_MD: f32 = 28.0;

    /// Brand name, card titles
    pub const TITLE_SM: f32 = 20.0;

    pub const BODY_LG: f32 = 17.0;

    pub const BODY: f32 = 15.0;

    /// Eyebrows, hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 2.0;
    pub const MD: f32 = 6.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.12,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 16.0 },
        blur_radius: 48.0,
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

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::LIGHT_SPOT > 0.0 && opacity::LIGHT_SPOT < 1.0);

    // Geometry validation
    assert!(sizing::PAGE_PADDING_X_MAX > sizing::PAGE_PADDING_X_MIN);
    assert!(sizing::HERO_MIN_HEIGHT > sizing::HEADER_HEIGHT);
    assert!(sizing::CURSOR_GLOW > sizing::CURSOR_DOT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
        assert_eq!(spacing::XXXL, spacing::XXL * 2.0);
    }
}
