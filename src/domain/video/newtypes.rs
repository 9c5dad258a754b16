// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = crate::config::DEFAULT_VOLUME;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// This newtype enforces validity at the type level, making it impossible
/// to create an invalid volume value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN is treated as silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if this is the minimum volume.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    /// Returns true if this is the maximum volume.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= volume_bounds::MAX
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate bounds (0.25x to 4.0x).
pub mod rate_bounds {
    /// Minimum playback rate.
    pub const MIN: f64 = 0.25;
    /// Maximum playback rate.
    pub const MAX: f64 = 4.0;
    /// Default playback rate (1.0 = normal speed).
    pub const DEFAULT: f64 = crate::config::DEFAULT_RATE;
}

/// Playback rate, guaranteed to be within valid range (0.25x - 4.0x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a new playback rate, clamping to valid range.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if rate.is_nan() {
            return Self::default();
        }
        Self(rate.clamp(rate_bounds::MIN, rate_bounds::MAX))
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if this is the minimum rate.
    #[must_use]
    pub fn is_min(self) -> bool {
        (self.0 - rate_bounds::MIN).abs() < 0.001
    }

    /// Returns true if this is the maximum rate.
    #[must_use]
    pub fn is_max(self) -> bool {
        (self.0 - rate_bounds::MAX).abs() < 0.001
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_bounds::DEFAULT)
    }
}

// =============================================================================
// SeekerProgress
// =============================================================================

/// Normalized playhead position shown by the seek bar.
///
/// Always within `[0.0, 1.0]`. NaN (a zero-by-zero ratio) maps to 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct SeekerProgress(f64);

impl SeekerProgress {
    /// Start of the media.
    pub const START: Self = Self(0.0);

    /// End of the media.
    pub const END: Self = Self(1.0);

    /// Creates a new progress value, clamping to `[0, 1]`.
    #[must_use]
    pub fn new(progress: f64) -> Self {
        if progress.is_nan() {
            return Self::START;
        }
        Self(progress.clamp(0.0, 1.0))
    }

    /// Derives the progress from a playback position.
    ///
    /// Returns 0 while the duration is unknown (zero, negative or not finite).
    #[must_use]
    pub fn from_position(current_time: f64, duration: f64) -> Self {
        if !duration.is_finite() || duration <= 0.0 {
            return Self::START;
        }
        Self::new(current_time / duration)
    }

    /// Returns the progress value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Converts the progress into a position in seconds for the given duration.
    #[must_use]
    pub fn to_position(self, duration: f64) -> f64 {
        self.0 * duration.max(0.0)
    }

    /// Returns true when the playhead is parked at the end.
    #[must_use]
    pub fn is_end(self) -> bool {
        self.0 >= 1.0
    }
}

// =============================================================================
// Tests
// =============================================================================
