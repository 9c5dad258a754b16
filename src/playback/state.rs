// SPDX-License-Identifier: MPL-2.0
//! The playback record shared by every overlay component.

use crate::config::PlayerConfig;
use crate::domain::video::{Orientation, PlaybackRate, ResizeMode, SeekerProgress, Volume};
use crate::error::SurfaceError;

/// Single source of truth for playback, written only by [`Machine`](super::Machine).
///
/// Renderers get it by shared reference after a transition has completed,
/// so they never observe a half-applied update.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_seeking: bool,
    pub is_controls_visible: bool,
    pub is_full_screen: bool,
    pub resize_mode: ResizeMode,
    pub volume: Volume,
    pub muted: bool,
    pub rate: PlaybackRate,
    pub loading: bool,
    pub error: bool,
    /// Last error reported by the surface, kept for the error label.
    pub last_error: Option<SurfaceError>,
    pub current_time: f64,
    pub duration: f64,
    pub seeker_progress: SeekerProgress,
    pub orientation: Orientation,
    pub show_time_remaining: bool,
    pub loop_enabled: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: true,
            is_seeking: false,
            is_controls_visible: true,
            is_full_screen: false,
            resize_mode: ResizeMode::default(),
            volume: Volume::default(),
            muted: false,
            rate: PlaybackRate::default(),
            loading: true,
            error: false,
            last_error: None,
            current_time: 0.0,
            duration: 0.0,
            seeker_progress: SeekerProgress::START,
            orientation: Orientation::default(),
            show_time_remaining: true,
            loop_enabled: false,
        }
    }
}

impl PlaybackState {
    /// Creates the mount-time state for `config`.
    #[must_use]
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            is_full_screen: config.initial_full_screen(),
            resize_mode: config.resize_mode,
            volume: config.volume,
            muted: config.muted,
            rate: config.rate,
            loop_enabled: config.loop_enabled,
            ..Self::default()
        }
    }

    /// Returns true once the surface has reported a usable duration.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }

    /// Resize mode the surface should actually use.
    ///
    /// Fullscreen always fills the screen, whatever was configured.
    #[must_use]
    pub fn effective_resize_mode(&self) -> ResizeMode {
        if self.is_full_screen {
            ResizeMode::Cover
        } else {
            self.resize_mode
        }
    }

    /// Clamps a position into the valid range for the current duration.
    pub(crate) fn clamp_time(&self, time: f64) -> f64 {
        let time = if time.is_finite() { time.max(0.0) } else { 0.0 };
        if self.has_duration() {
            time.min(self.duration)
        } else {
            time
        }
    }

    /// Recomputes the seek bar position from the playhead.
    pub(crate) fn derive_progress(&mut self) {
        self.seeker_progress = SeekerProgress::from_position(self.current_time, self.duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::Source;

    #[test]
    fn defaults_match_mount_state() {
        let state = PlaybackState::default();
        assert!(state.is_playing);
        assert!(state.is_controls_visible);
        assert!(state.loading);
        assert!(state.show_time_remaining);
        assert!(!state.error);
        assert_eq!(state.orientation, Orientation::Portrait);
    }

    #[test]
    fn cover_config_forces_full_screen() {
        let mut config = PlayerConfig::new(Source::new("clip.mp4"));
        config.resize_mode = ResizeMode::Cover;
        config.is_full_screen = false;

        let state = PlaybackState::from_config(&config);
        assert!(state.is_full_screen);
        assert_eq!(state.resize_mode, ResizeMode::Cover);
    }

    #[test]
    fn full_screen_uses_cover_on_the_surface() {
        let mut state = PlaybackState {
            resize_mode: ResizeMode::Contain,
            ..PlaybackState::default()
        };
        assert_eq!(state.effective_resize_mode(), ResizeMode::Contain);

        state.is_full_screen = true;
        assert_eq!(state.effective_resize_mode(), ResizeMode::Cover);
    }

    #[test]
    fn clamp_time_respects_known_duration_only() {
        let mut state = PlaybackState::default();
        assert_eq!(state.clamp_time(42.0), 42.0);
        assert_eq!(state.clamp_time(-1.0), 0.0);

        state.duration = 30.0;
        assert_eq!(state.clamp_time(42.0), 30.0);
        assert_eq!(state.clamp_time(f64::NAN), 0.0);
    }
}
