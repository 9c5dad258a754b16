// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes of the playback overlay, named after the part of
the overlay they style.

## Organization

- **Palette**: Scrim, foreground and accent colors
- **Opacity**: Alpha levels layered under the group fade
- **Spacing**: Spacing scale (4px steps)
- **Sizing**: Seek bar, transport buttons and spinner
- **Typography**: Glyph and label sizes
- **Radius**: Button and badge corners

## Examples

```
use iced_playback_overlay::ui::design_tokens::{palette, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::SCRIM
};
assert!(scrim.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Backdrop behind control groups and the video letterbox.
    pub const SCRIM: Color = Color::BLACK;
    /// Glyphs, time label and the seek knob.
    pub const FOREGROUND: Color = Color::WHITE;
    pub const PLACEHOLDER_TEXT: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Played part of the seek track.
    pub const ACCENT: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.4, 0.7, 1.0);

    pub const ERROR: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

/// Static alpha levels. The animated group opacity multiplies these.
pub mod opacity {
    pub const SCRIM: f32 = 0.5;
    pub const BUTTON_IDLE: f32 = 0.2;
    pub const BUTTON_HOVER: f32 = 0.8;
    pub const BUTTON_PRESSED: f32 = 0.9;
    /// Unplayed part of the seek track.
    pub const RAIL: f32 = 0.35;
    pub const ERROR_BADGE: f32 = 0.7;
    pub const NOTICE_BADGE: f32 = 0.75;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Knob diameter at full scale; idle knobs are drawn smaller.
    pub const SEEK_KNOB: f32 = 16.0;
    pub const SEEK_TRACK: f32 = 4.0;
    /// Hit area height of the seek bar, larger than the drawn track.
    pub const SEEK_HIT_HEIGHT: f32 = 32.0;
    /// Minimum width of the time label so it does not jitter.
    pub const TIME_LABEL_WIDTH: f32 = 56.0;

    pub const TRANSPORT_BUTTON: f32 = 36.0;
    pub const SPINNER: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Transport glyphs (play, pause, close).
    pub const GLYPH: f32 = 20.0;

    /// Time label and error text.
    pub const LABEL: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const BADGE: f32 = 8.0;
    pub const PILL: f32 = 9999.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);
    assert!(opacity::BUTTON_IDLE < opacity::BUTTON_HOVER);
    assert!(opacity::BUTTON_HOVER < opacity::BUTTON_PRESSED);

    assert!(sizing::SEEK_HIT_HEIGHT > sizing::SEEK_KNOB);
    assert!(sizing::SEEK_KNOB > sizing::SEEK_TRACK);
    assert!(sizing::TRANSPORT_BUTTON > typography::GLYPH);

    assert!(typography::GLYPH > typography::LABEL);
};
