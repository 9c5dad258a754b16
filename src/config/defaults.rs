// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Controls**: Auto-hide delay, tap window, overlay animation
//! - **Layout**: Hidden offsets and orientation paddings
//! - **Video**: Volume and playback rate
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default inactivity delay before the overlay hides itself (in milliseconds).
pub const DEFAULT_CONTROL_TIMEOUT_MS: u64 = 5000;

/// Minimum auto-hide delay (in milliseconds).
pub const MIN_CONTROL_TIMEOUT_MS: u64 = 1000;

/// Maximum auto-hide delay (in milliseconds).
pub const MAX_CONTROL_TIMEOUT_MS: u64 = 60_000;

/// Default window separating a single tap from a double tap (in milliseconds).
///
/// The same window delays the single-tap action, so both rules stay coupled.
pub const DEFAULT_TAP_WINDOW_MS: u64 = 300;

/// Minimum tap window (in milliseconds).
pub const MIN_TAP_WINDOW_MS: u64 = 100;

/// Maximum tap window (in milliseconds).
pub const MAX_TAP_WINDOW_MS: u64 = 1000;

/// Default duration of the show/hide overlay transition (in milliseconds).
pub const DEFAULT_ANIMATION_MS: u64 = 500;

/// Maximum duration of the show/hide overlay transition (in milliseconds).
pub const MAX_ANIMATION_MS: u64 = 5000;

/// How long a notice stays on the overlay (in milliseconds).
pub const NOTICE_DURATION_MS: u64 = 5000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Margin offset of a control group when fully hidden.
pub const HIDDEN_MARGIN: f32 = -100.0;

/// Margin offset of a control group when fully shown.
pub const SHOWN_MARGIN: f32 = 0.0;

/// Padding used instead of the safe-area inset in landscape orientation.
pub const LANDSCAPE_PADDING: f32 = 10.0;

/// Seek knob scale while a drag is in progress.
pub const KNOB_SCALE_ACTIVE: f32 = 1.0;

/// Seek knob scale at rest.
pub const KNOB_SCALE_IDLE: f32 = 0.8;

/// Default player width when the host does not provide one.
pub const DEFAULT_PLAYER_WIDTH: f32 = 800.0;

/// Default player height when the host does not provide one.
pub const DEFAULT_PLAYER_HEIGHT: f32 = 450.0;

// ==========================================================================
// Video Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Default playback rate (1.0 = normal speed).
pub const DEFAULT_RATE: f64 = 1.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
