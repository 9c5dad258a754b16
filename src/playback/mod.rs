// SPDX-License-Identifier: MPL-2.0
//! Playback state machine and time label formatting.
//!
//! [`Machine`] owns the [`PlaybackState`] record and is its only writer.
//! Transitions return an [`Outcome`] that the orchestrator applies to the
//! surface and to the visibility timer.

pub mod machine;
pub mod state;
pub mod time_format;

pub use machine::{Machine, Outcome, SurfaceCommand, VisibilityRequest};
pub use state::PlaybackState;
pub use time_format::{calculate_time, format_time};
