// SPDX-License-Identifier: MPL-2.0
//! Playback transitions.
//!
//! Every transition mutates the [`PlaybackState`] completely before it
//! returns and describes its side effects in an [`Outcome`]: commands the
//! surface must receive, plus at most one request for the visibility timer.

use super::state::PlaybackState;
use crate::config::PlayerConfig;
use crate::domain::video::{Orientation, SeekerProgress, Source};
use crate::error::SurfaceError;

/// Imperative commands for the video surface.
///
/// Declarative props (paused, volume, muted, rate, resize mode) are not
/// commands; the orchestrator diffs them after every update.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    /// Jump to a position in seconds.
    Seek(f64),
    /// Start loading a new source.
    Load(Source),
}

/// What a transition asks of the control visibility timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityRequest {
    /// Restart the inactivity delay.
    Reset,
    /// Make the overlay visible, optionally arming auto-hide.
    Show { auto_hide: bool },
    /// Hide the overlay and cancel any pending auto-hide.
    Hide,
}

/// Side effects of a single transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    pub commands: Vec<SurfaceCommand>,
    pub visibility: Option<VisibilityRequest>,
}

impl Outcome {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    fn reset() -> Self {
        Self {
            commands: Vec::new(),
            visibility: Some(VisibilityRequest::Reset),
        }
    }

    fn with_command(mut self, command: SurfaceCommand) -> Self {
        self.commands.push(command);
        self
    }

    fn with_visibility(mut self, request: VisibilityRequest) -> Self {
        self.visibility = Some(request);
        self
    }

    /// Returns true if nothing needs to be applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.visibility.is_none()
    }
}

/// Owner of the [`PlaybackState`].
#[derive(Debug, Clone, Default)]
pub struct Machine {
    state: PlaybackState,
}

impl Machine {
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            state: PlaybackState::from_config(config),
        }
    }

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    // ------------------------------------------------------------------
    // Surface callbacks
    // ------------------------------------------------------------------

    pub fn on_load_start(&mut self) -> Outcome {
        self.state.loading = true;
        Outcome::reset()
    }

    pub fn on_load(&mut self, duration: f64) -> Outcome {
        self.state.loading = false;
        self.state.duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        self.state.current_time = self.state.clamp_time(self.state.current_time);
        if !self.state.is_seeking {
            self.state.derive_progress();
        }

        if self.state.is_controls_visible {
            Outcome::reset()
        } else {
            Outcome::none()
        }
    }

    /// Records a surface failure. Terminal until [`set_source`](Self::set_source).
    pub fn on_error(&mut self, error: SurfaceError) -> Outcome {
        self.state.loading = false;
        self.state.error = true;
        self.state.last_error = Some(error);
        Outcome::none()
    }

    /// Applies a playhead update.
    ///
    /// While a seek gesture is live the bar stays where the pointer put it;
    /// only `current_time` follows the surface.
    pub fn on_progress(&mut self, current_time: f64) -> Outcome {
        self.state.current_time = self.state.clamp_time(current_time);
        if !self.state.is_seeking {
            self.state.derive_progress();
        }
        Outcome::none()
    }

    pub fn on_end(&mut self) -> Outcome {
        self.state.current_time = self.state.duration;
        let outcome = Outcome::none().with_command(SurfaceCommand::Seek(0.0));

        if self.state.loop_enabled {
            self.state.seeker_progress = SeekerProgress::END;
            outcome
        } else {
            self.state.is_playing = false;
            self.state.seeker_progress = SeekerProgress::START;
            outcome.with_visibility(VisibilityRequest::Hide)
        }
    }

    // ------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------

    /// Flips play/pause, rewinding first when the media has ended.
    ///
    /// While seeking, playback stays paused and only auto-hide is reset; the
    /// play intent applied at release lives in the gesture session.
    pub fn toggle_play_pause(&mut self) -> Outcome {
        let mut outcome = Outcome::reset();
        if self.state.is_seeking {
            return outcome;
        }
        if self.state.seeker_progress.is_end() {
            self.state.seeker_progress = SeekerProgress::START;
            outcome = outcome.with_command(SurfaceCommand::Seek(0.0));
        }
        self.state.is_playing = !self.state.is_playing;
        outcome
    }

    /// Flips fullscreen. Returns false if the flip was refused.
    ///
    /// Leaving fullscreen is refused while the resize mode is `Cover`.
    pub fn toggle_full_screen(&mut self) -> bool {
        if self.state.is_full_screen && self.state.resize_mode.forces_full_screen() {
            return false;
        }
        self.state.is_full_screen = !self.state.is_full_screen;
        true
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.state.orientation = orientation;
    }

    pub fn toggle_time_display(&mut self) -> Outcome {
        self.state.show_time_remaining = !self.state.show_time_remaining;
        Outcome::reset()
    }

    /// Mirrors the visibility timer's flag into the record.
    pub fn set_controls_visible(&mut self, visible: bool) {
        self.state.is_controls_visible = visible;
    }

    /// Starts over with a new source, clearing any previous error.
    ///
    /// A drag still in progress ends with `resume_playing`, the intent its
    /// cancelled session captured (playing when unknown).
    pub fn set_source(&mut self, source: Source, resume_playing: Option<bool>) -> Outcome {
        self.state.loading = true;
        self.state.error = false;
        self.state.last_error = None;
        self.state.current_time = 0.0;
        self.state.duration = 0.0;
        self.state.seeker_progress = SeekerProgress::START;
        if self.state.is_seeking {
            self.state.is_seeking = false;
            self.state.is_playing = resume_playing.unwrap_or(true);
        }
        Outcome::reset().with_command(SurfaceCommand::Load(source))
    }

    // ------------------------------------------------------------------
    // Seek gesture
    // ------------------------------------------------------------------

    /// Enters seeking; playback pauses until [`end_seek`](Self::end_seek).
    pub fn begin_seek(&mut self) -> Outcome {
        self.state.is_seeking = true;
        self.state.is_playing = false;
        Outcome::reset()
    }

    /// Moves the bar to `progress` and seeks the surface there.
    pub fn seek_to(&mut self, progress: SeekerProgress) -> Outcome {
        self.state.seeker_progress = progress;
        Outcome::reset().with_command(SurfaceCommand::Seek(
            progress.to_position(self.state.duration),
        ))
    }

    /// Leaves seeking and restores the play intent captured at grant.
    pub fn end_seek(&mut self, resume_playing: bool) -> Outcome {
        self.state.is_seeking = false;
        self.state.is_playing = resume_playing;
        Outcome::reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::ResizeMode;
    use crate::test_utils::assert_abs_diff_eq;

    fn machine() -> Machine {
        Machine::new(&PlayerConfig::new(Source::new("clip.mp4")))
    }

    fn loaded(duration: f64) -> Machine {
        let mut machine = machine();
        let _ = machine.on_load_start();
        let _ = machine.on_load(duration);
        machine
    }

    #[test]
    fn load_start_sets_loading_and_resets_timer() {
        let mut machine = machine();
        let outcome = machine.on_load_start();
        assert!(machine.state().loading);
        assert_eq!(outcome.visibility, Some(VisibilityRequest::Reset));
    }

    #[test]
    fn load_stores_duration_and_resets_when_visible() {
        let mut machine = machine();
        let outcome = machine.on_load(120.0);
        assert!(!machine.state().loading);
        assert_abs_diff_eq!(machine.state().duration, 120.0);
        assert_eq!(outcome.visibility, Some(VisibilityRequest::Reset));
    }

    #[test]
    fn load_while_hidden_leaves_timer_alone() {
        let mut machine = machine();
        machine.set_controls_visible(false);
        assert!(machine.on_load(120.0).is_empty());
    }

    #[test]
    fn load_sanitizes_bad_duration() {
        let mut machine = machine();
        let _ = machine.on_load(f64::NAN);
        assert_abs_diff_eq!(machine.state().duration, 0.0);
        let _ = machine.on_load(-3.0);
        assert_abs_diff_eq!(machine.state().duration, 0.0);
    }

    #[test]
    fn error_is_terminal_and_observable() {
        let mut machine = loaded(60.0);
        let _ = machine.on_error(SurfaceError::Playback("decoder".into()));
        let state = machine.state();
        assert!(state.error);
        assert!(!state.loading);
        assert_eq!(
            state.last_error,
            Some(SurfaceError::Playback("decoder".into()))
        );
    }

    #[test]
    fn progress_derives_seeker_when_idle() {
        let mut machine = loaded(120.0);
        let _ = machine.on_progress(30.0);
        assert_abs_diff_eq!(machine.state().current_time, 30.0);
        assert_abs_diff_eq!(machine.state().seeker_progress.value(), 0.25);
    }

    #[test]
    fn progress_while_seeking_keeps_seeker() {
        let mut machine = loaded(120.0);
        let _ = machine.begin_seek();
        let _ = machine.seek_to(SeekerProgress::new(0.6));
        let _ = machine.on_progress(12.0);

        assert_abs_diff_eq!(machine.state().seeker_progress.value(), 0.6);
        assert_abs_diff_eq!(machine.state().current_time, 12.0);
    }

    #[test]
    fn progress_is_clamped_to_duration() {
        let mut machine = loaded(10.0);
        let _ = machine.on_progress(11.5);
        assert_abs_diff_eq!(machine.state().current_time, 10.0);
        assert!(machine.state().seeker_progress.is_end());
    }

    #[test]
    fn progress_before_load_keeps_bar_at_zero() {
        let mut machine = machine();
        let _ = machine.on_progress(4.0);
        assert_abs_diff_eq!(machine.state().current_time, 4.0);
        assert_eq!(machine.state().seeker_progress, SeekerProgress::START);
    }

    #[test]
    fn end_without_loop_parks_at_start_and_hides() {
        let mut machine = loaded(120.0);
        let outcome = machine.on_end();
        let state = machine.state();

        assert!(!state.is_playing);
        assert_eq!(state.seeker_progress, SeekerProgress::START);
        assert_abs_diff_eq!(state.current_time, 120.0);
        assert_eq!(outcome.commands, vec![SurfaceCommand::Seek(0.0)]);
        assert_eq!(outcome.visibility, Some(VisibilityRequest::Hide));
    }

    #[test]
    fn end_with_loop_keeps_playing() {
        let mut config = PlayerConfig::new(Source::new("clip.mp4"));
        config.loop_enabled = true;
        let mut machine = Machine::new(&config);
        let _ = machine.on_load(90.0);

        let outcome = machine.on_end();
        let state = machine.state();
        assert!(state.is_playing);
        assert_eq!(state.seeker_progress, SeekerProgress::END);
        assert_abs_diff_eq!(state.current_time, 90.0);
        assert_eq!(outcome.commands, vec![SurfaceCommand::Seek(0.0)]);
        assert_eq!(outcome.visibility, None);
    }

    #[test]
    fn play_pause_flips_and_resets() {
        let mut machine = loaded(60.0);
        let outcome = machine.toggle_play_pause();
        assert!(!machine.state().is_playing);
        assert!(outcome.commands.is_empty());
        assert_eq!(outcome.visibility, Some(VisibilityRequest::Reset));
    }

    #[test]
    fn play_after_loop_end_rewinds() {
        let mut config = PlayerConfig::new(Source::new("clip.mp4"));
        config.loop_enabled = true;
        let mut machine = Machine::new(&config);
        let _ = machine.on_load(90.0);
        let _ = machine.on_end();

        let outcome = machine.toggle_play_pause();
        assert_eq!(machine.state().seeker_progress, SeekerProgress::START);
        assert_eq!(outcome.commands, vec![SurfaceCommand::Seek(0.0)]);
        assert!(!machine.state().is_playing);
    }

    #[test]
    fn full_screen_cannot_be_left_in_cover() {
        let mut config = PlayerConfig::new(Source::new("clip.mp4"));
        config.resize_mode = ResizeMode::Cover;
        let mut machine = Machine::new(&config);

        assert!(!machine.toggle_full_screen());
        assert!(machine.state().is_full_screen);
    }

    #[test]
    fn full_screen_toggles_in_contain() {
        let mut machine = machine();
        assert!(machine.toggle_full_screen());
        assert!(machine.state().is_full_screen);
        assert!(machine.toggle_full_screen());
        assert!(!machine.state().is_full_screen);
    }

    #[test]
    fn seek_round_trip_restores_play_intent() {
        let mut machine = loaded(100.0);
        let before = machine.state().is_playing;

        let _ = machine.begin_seek();
        assert!(machine.state().is_seeking);
        assert!(!machine.state().is_playing);

        let outcome = machine.seek_to(SeekerProgress::new(0.6));
        assert_eq!(outcome.commands, vec![SurfaceCommand::Seek(60.0)]);

        let _ = machine.end_seek(before);
        assert!(!machine.state().is_seeking);
        assert_eq!(machine.state().is_playing, before);
    }

    #[test]
    fn play_pause_during_seek_keeps_playback_paused() {
        let mut machine = loaded(100.0);
        let _ = machine.begin_seek();

        let outcome = machine.toggle_play_pause();
        assert!(machine.state().is_seeking);
        assert!(!machine.state().is_playing);
        assert!(outcome.commands.is_empty());
        assert_eq!(outcome.visibility, Some(VisibilityRequest::Reset));
    }

    #[test]
    fn set_source_mid_seek_restores_captured_intent() {
        let mut machine = loaded(100.0);
        let _ = machine.begin_seek();

        let _ = machine.set_source(Source::new("next.mp4"), Some(false));
        assert!(!machine.state().is_seeking);
        assert!(!machine.state().is_playing);
    }

    #[test]
    fn set_source_clears_error_and_loads() {
        let mut machine = loaded(60.0);
        let _ = machine.on_progress(20.0);
        let _ = machine.on_error(SurfaceError::Load("404".into()));

        let outcome = machine.set_source(Source::new("retry.mp4"), None);
        let state = machine.state();
        assert!(state.loading);
        assert!(!state.error);
        assert!(state.last_error.is_none());
        assert_abs_diff_eq!(state.current_time, 0.0);
        assert_abs_diff_eq!(state.duration, 0.0);
        assert_eq!(
            outcome.commands,
            vec![SurfaceCommand::Load(Source::new("retry.mp4"))]
        );
    }

    #[test]
    fn time_display_toggles() {
        let mut machine = machine();
        let _ = machine.toggle_time_display();
        assert!(!machine.state().show_time_remaining);
    }

    #[test]
    fn orientation_is_layout_only() {
        let mut machine = loaded(60.0);
        let before = machine.state().clone();
        machine.set_orientation(Orientation::Landscape);

        assert_eq!(machine.state().orientation, Orientation::Landscape);
        assert_eq!(machine.state().is_playing, before.is_playing);
        assert_eq!(machine.state().seeker_progress, before.seeker_progress);
    }
}
