// SPDX-License-Identifier: MPL-2.0
//! Safe-area insets and the control paddings derived from them.

use crate::config::LANDSCAPE_PADDING;
use crate::domain::video::Orientation;

/// Screen areas covered by system UI (notches, home indicators).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
}

impl SafeAreaInsets {
    #[must_use]
    pub fn new(top: f32, bottom: f32) -> Self {
        Self {
            top: top.max(0.0),
            bottom: bottom.max(0.0),
        }
    }
}

/// Supplies the current safe-area insets.
pub trait InsetProvider {
    fn insets(&self) -> SafeAreaInsets;
}

/// Insets that never change; desktop windows have none.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedInsets(pub SafeAreaInsets);

impl InsetProvider for FixedInsets {
    fn insets(&self) -> SafeAreaInsets {
        self.0
    }
}

/// Padding above the top group and below the bottom group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPaddings {
    pub top: f32,
    pub bottom: f32,
}

/// Portrait follows the insets; landscape uses a fixed padding.
#[must_use]
pub fn control_paddings(orientation: Orientation, insets: SafeAreaInsets) -> ControlPaddings {
    match orientation {
        Orientation::Portrait => ControlPaddings {
            top: insets.top,
            bottom: insets.bottom,
        },
        Orientation::Landscape => ControlPaddings {
            top: LANDSCAPE_PADDING,
            bottom: LANDSCAPE_PADDING,
        },
    }
}
