// SPDX-License-Identifier: MPL-2.0
//! Declarative surface props.
//!
//! The player never tells the surface "pause" directly. It derives the full
//! set of props from the playback record after each update and sends only
//! the ones that differ from what the surface last received.

use crate::domain::video::{PlaybackRate, ResizeMode, Volume};
use crate::playback::PlaybackState;
use crate::surface::VideoSurface;

/// Everything the surface renders from, apart from the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProps {
    pub paused: bool,
    pub volume: Volume,
    pub muted: bool,
    pub rate: PlaybackRate,
    pub resize_mode: ResizeMode,
}

impl SurfaceProps {
    #[must_use]
    pub fn from_state(state: &PlaybackState) -> Self {
        Self {
            paused: !state.is_playing,
            volume: state.volume,
            muted: state.muted,
            rate: state.rate,
            resize_mode: state.effective_resize_mode(),
        }
    }

    /// Sends every prop, used right after a surface is attached.
    pub fn push_all<S: VideoSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_paused(self.paused);
        surface.set_volume(self.volume);
        surface.set_muted(self.muted);
        surface.set_rate(self.rate);
        surface.set_resize_mode(self.resize_mode);
    }

    /// Sends the props that differ from `previous`. Returns how many were sent.
    pub fn push_changes<S: VideoSurface + ?Sized>(&self, previous: &Self, surface: &mut S) -> usize {
        let mut sent = 0;
        if self.paused != previous.paused {
            surface.set_paused(self.paused);
            sent += 1;
        }
        if self.volume != previous.volume {
            surface.set_volume(self.volume);
            sent += 1;
        }
        if self.muted != previous.muted {
            surface.set_muted(self.muted);
            sent += 1;
        }
        if self.rate != previous.rate {
            surface.set_rate(self.rate);
            sent += 1;
        }
        if self.resize_mode != previous.resize_mode {
            surface.set_resize_mode(self.resize_mode);
            sent += 1;
        }
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceCall};

    #[test]
    fn paused_mirrors_play_intent() {
        let mut state = PlaybackState::default();
        assert!(!SurfaceProps::from_state(&state).paused);
        state.is_playing = false;
        assert!(SurfaceProps::from_state(&state).paused);
    }

    #[test]
    fn full_screen_forces_cover() {
        let mut state = PlaybackState::default();
        state.resize_mode = ResizeMode::Stretch;
        state.is_full_screen = true;
        assert_eq!(
            SurfaceProps::from_state(&state).resize_mode,
            ResizeMode::Cover
        );
    }

    #[test]
    fn push_all_sends_five_calls() {
        let mut surface = RecordingSurface::new();
        SurfaceProps::from_state(&PlaybackState::default()).push_all(&mut surface);
        assert_eq!(surface.calls().len(), 5);
    }

    #[test]
    fn push_changes_sends_only_differences() {
        let mut surface = RecordingSurface::new();
        let before = SurfaceProps::from_state(&PlaybackState::default());
        let after = SurfaceProps {
            paused: true,
            ..before
        };

        assert_eq!(after.push_changes(&before, &mut surface), 1);
        assert_eq!(surface.calls(), &[SurfaceCall::SetPaused(true)]);
    }

    #[test]
    fn identical_props_send_nothing() {
        let mut surface = RecordingSurface::new();
        let props = SurfaceProps::from_state(&PlaybackState::default());
        assert_eq!(props.push_changes(&props, &mut surface), 0);
        assert!(surface.calls().is_empty());
    }
}
