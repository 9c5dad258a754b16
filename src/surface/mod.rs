// SPDX-License-Identifier: MPL-2.0
//! Video surface port definition.
//!
//! This module defines the [`VideoSurface`] trait through which the overlay
//! drives an external playback engine, and the [`SurfaceEvent`]s that engine
//! reports back. Decoding and rendering live behind the trait.
//!
//! # Design Notes
//!
//! - Commands are fire-and-forget: failures come back as [`SurfaceEvent::Error`]
//! - Events are delivered to the player in the order the surface produced them
//! - The player tolerates having no surface attached at all

pub mod recording;
pub mod simulated;

pub use recording::{RecordingSurface, SurfaceCall};
pub use simulated::SimulatedSurface;

use crate::domain::video::{PlaybackRate, ResizeMode, Source, Volume};
use crate::error::SurfaceError;

// =============================================================================
// VideoSurface Trait
// =============================================================================

/// Port for the playback engine the overlay sits on.
///
/// # Lifecycle
///
/// 1. The player attaches the surface and pushes its current props
/// 2. `load()` starts a source; the surface answers with `LoadStart` then
///    `Load` or `Error`
/// 3. While playing, the surface reports `Progress` and finally `End`
/// 4. The player detaches the surface at unmount
pub trait VideoSurface {
    /// Starts loading `source`, replacing whatever was playing.
    fn load(&mut self, source: &Source);

    /// Jumps to `seconds` from the start of the media.
    fn seek(&mut self, seconds: f64);

    fn set_paused(&mut self, paused: bool);

    fn set_volume(&mut self, volume: Volume);

    fn set_muted(&mut self, muted: bool);

    fn set_resize_mode(&mut self, mode: ResizeMode);

    fn set_rate(&mut self, rate: PlaybackRate);
}

/// Notifications emitted by a [`VideoSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The surface started loading a source.
    LoadStart,
    /// The media is ready; `duration` is in seconds.
    Load { duration: f64 },
    /// The playhead moved; `current_time` is in seconds.
    Progress { current_time: f64 },
    /// Loading or playback failed.
    Error(SurfaceError),
    /// The playhead reached the end of the media.
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn VideoSurface) {}

    fn drive(surface: &mut dyn VideoSurface) {
        surface.load(&Source::new("clip.mp4"));
        surface.seek(3.0);
        surface.set_paused(true);
    }

    #[test]
    fn commands_through_trait_object_reach_the_surface() {
        let mut surface = RecordingSurface::default();
        drive(&mut surface);

        assert_eq!(
            surface.calls(),
            [
                SurfaceCall::Load(Source::new("clip.mp4")),
                SurfaceCall::Seek(3.0),
                SurfaceCall::SetPaused(true),
            ]
        );
    }
}
