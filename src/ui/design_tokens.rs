// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! - **Palette**: base colors, including the team's brand hues
//! - **Opacity**: overlay and fade levels
//! - **Spacing**: 8px grid
//! - **Sizing**: tiles, hero band, spotlight, lightbox controls
//! - **Typography**: font size scale
//! - **Radius** and **Shadow**
//!
//! ```
//! use hackfolio::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::BACKDROP,
//!     ..palette::BLACK
//! };
//! let gap = spacing::SM;
//! # let _ = (backdrop, gap);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const INK_900: Color = Color::from_rgb(0.07, 0.07, 0.11);
    pub const INK_800: Color = Color::from_rgb(0.12, 0.12, 0.17);
    pub const INK_700: Color = Color::from_rgb(0.18, 0.18, 0.24);
    pub const GRAY_500: Color = Color::from_rgb(0.45, 0.46, 0.52);
    pub const GRAY_300: Color = Color::from_rgb(0.7, 0.71, 0.76);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.93, 0.95);

    // Brand: electric indigo with a coral accent
    pub const INDIGO_300: Color = Color::from_rgb(0.62, 0.6, 1.0);
    pub const INDIGO_500: Color = Color::from_rgb(0.39, 0.35, 0.96);
    pub const INDIGO_700: Color = Color::from_rgb(0.26, 0.22, 0.75);
    pub const CORAL_400: Color = Color::from_rgb(1.0, 0.5, 0.42);
    pub const CORAL_600: Color = Color::from_rgb(0.88, 0.33, 0.26);

    /// Gold used for achievement badges and the rare logo.
    pub const GOLD_400: Color = Color::from_rgb(0.98, 0.78, 0.25);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Levels
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.2;
    pub const CAPTION_BAR: f32 = 0.6;
    /// Lightbox backdrop.
    pub const BACKDROP: f32 = 0.88;
    pub const HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    /// Edge of a gallery tile.
    pub const TILE: f32 = 180.0;
    /// Width of a "wide" tile in the fun layout.
    pub const TILE_WIDE: f32 = TILE * 2.0 + super::spacing::SM;
    pub const TILES_PER_ROW: usize = 4;

    pub const HERO_HEIGHT: f32 = 280.0;
    pub const SPOTLIGHT_HEIGHT: f32 = 220.0;
    pub const LOGO_HEIGHT: f32 = 56.0;
    pub const AVATAR: f32 = 72.0;

    pub const LIGHTBOX_NAV: f32 = 48.0;
    pub const LIGHTBOX_MAX_WIDTH: f32 = 960.0;
    pub const PICKER_WIDTH: f32 = 220.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const NAVBAR_HEIGHT: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 40.0;
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0;
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

    pub const TILE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 6.0,
    };

    pub const LIFTED: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 24.0,
    };
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
    assert!(opacity::BACKDROP > opacity::CAPTION_BAR);
    assert!(opacity::BACKDROP < opacity::OPAQUE);

    assert!(sizing::TILE_WIDE > sizing::TILE);
    assert!(sizing::TILES_PER_ROW > 0);
    assert!(sizing::HERO_HEIGHT > sizing::SPOTLIGHT_HEIGHT);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
