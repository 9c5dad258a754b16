// SPDX-License-Identifier: MPL-2.0
//! Overlay timing newtypes.
//!
//! This module provides type-safe wrappers for the delays that drive the
//! control overlay, ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_ANIMATION_MS, DEFAULT_CONTROL_TIMEOUT_MS, DEFAULT_TAP_WINDOW_MS, MAX_ANIMATION_MS,
    MAX_CONTROL_TIMEOUT_MS, MAX_TAP_WINDOW_MS, MIN_CONTROL_TIMEOUT_MS, MIN_TAP_WINDOW_MS,
};
use std::time::Duration;

// =============================================================================
// ControlTimeout
// =============================================================================

/// Inactivity delay in milliseconds before the overlay auto-hides.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1000–60000 ms).
///
/// # Example
///
/// ```
/// use iced_playback_overlay::domain::ui::ControlTimeout;
///
/// let timeout = ControlTimeout::new(5000);
/// assert_eq!(timeout.value(), 5000);
///
/// // Values outside range are clamped
/// let too_low = ControlTimeout::new(10);
/// assert_eq!(too_low.value(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlTimeout(u64);

impl ControlTimeout {
    /// Creates a new timeout value, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_CONTROL_TIMEOUT_MS, MAX_CONTROL_TIMEOUT_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_CONTROL_TIMEOUT_MS
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_CONTROL_TIMEOUT_MS
    }
}

impl Default for ControlTimeout {
    fn default() -> Self {
        Self(DEFAULT_CONTROL_TIMEOUT_MS)
    }
}

// =============================================================================
// TapWindow
// =============================================================================

/// Window in milliseconds that separates a single tap from a double tap.
///
/// The same window delays the single-tap action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapWindow(u64);

impl TapWindow {
    /// Creates a new tap window, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TAP_WINDOW_MS, MAX_TAP_WINDOW_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TapWindow {
    fn default() -> Self {
        Self(DEFAULT_TAP_WINDOW_MS)
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Length of the overlay show/hide transition in milliseconds.
///
/// Zero disables the animation; values jump straight to their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Creates a new animation duration, capping at the maximum.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.min(MAX_ANIMATION_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if transitions are instantaneous.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(DEFAULT_ANIMATION_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
