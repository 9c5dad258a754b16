// SPDX-License-Identifier: MPL-2.0
//! Activity log entries recorded by the overlay player.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::video::Orientation;

/// User interactions with the overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Transport
    // ==========================================================================
    /// Play/pause button.
    TogglePlayback,

    /// Seek knob grabbed.
    SeekStart {
        /// Bar position when the drag began (0.0 to 1.0).
        progress: f64,
    },

    /// Seek knob released.
    SeekEnd {
        /// Position the surface was last sent to, in seconds.
        position_secs: f64,
    },

    /// Elapsed/remaining label tapped.
    ToggleTimeDisplay,

    // ==========================================================================
    // Screen
    // ==========================================================================
    /// Single tap on the video area.
    ToggleControls,

    /// Double tap or fullscreen button.
    ToggleFullscreen,

    /// Close button.
    Back,

    /// Host supplied a new source.
    ChangeSource,
}

/// Player state transitions worth keeping in the activity log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlaybackEvent {
    LoadStarted,
    Loaded {
        duration_secs: f64,
    },
    Ended {
        looped: bool,
    },
    ControlsShown,
    ControlsHidden,
    OrientationChanged {
        orientation: Orientation,
    },
    SurfaceAttached,
    SurfaceDetached,
}

/// One entry of the overlay activity log.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Stamps `kind` with `Instant::now()`.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Stamps `kind` with the caller's clock, as the timer-driven code does.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// What happened, tagged by `type` when serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    StateChange { state: PlaybackEvent },
    /// Ignored input or other recoverable oddity.
    Warning { message: String },
    /// Failure reported by the surface.
    Error { message: String },
}
