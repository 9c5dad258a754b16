// SPDX-License-Identifier: MPL-2.0
//! Overlay orchestrator.
//!
//! [`OverlayPlayer`] owns every sub-component of the overlay and is the only
//! place that talks to the video surface. Each call to [`OverlayPlayer::update`]
//! first runs due timers, then routes the message, applies the resulting
//! outcome, and finally diffs the declarative surface props.
//!
//! Time is always passed in explicitly. The host calls [`OverlayPlayer::tick`]
//! while [`OverlayPlayer::needs_ticks`] is true; nothing here sleeps or spawns.

pub mod props;
pub mod view_model;

pub use props::SurfaceProps;
pub use view_model::OverlayViewModel;

use crate::config::{PlayerConfig, NOTICE_DURATION_MS};
use crate::controls::{seek, tap, visibility, Animator};
use crate::diagnostics::{
    BufferCapacity, DiagnosticsCollector, DiagnosticsHandle, PlaybackEvent, UserAction,
};
use crate::domain::video::{Orientation, Source};
use crate::layout::{InsetProvider, SafeAreaInsets};
use crate::orientation::{ListenerId, OrientationProvider};
use crate::playback::{Machine, Outcome, PlaybackState, SurfaceCommand, VisibilityRequest};
use crate::surface::{SurfaceEvent, VideoSurface};
use crate::timer::DelayedAction;
use crossbeam_channel::{bounded, Receiver};
use std::time::{Duration, Instant};

/// Pending orientation changes kept before the provider starts dropping them.
const ORIENTATION_QUEUE_CAPACITY: usize = 8;

/// Pointer input on the seek bar, in track-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekPointer {
    Pressed { x: f32, width: f32 },
    Moved { x: f32, width: f32 },
    Released,
    /// The pointer was captured away (left the window, cancelled).
    Left,
}

/// Messages accepted by the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Surface(SurfaceEvent),
    SeekPointer(SeekPointer),
    /// Tap or click on the video area outside the controls.
    Tap,
    TogglePlayPause,
    ToggleFullScreen,
    ToggleTimeDisplay,
    Back,
    SetSource(Source),
    InsetsChanged(SafeAreaInsets),
}

/// Effects the host must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The close button was pressed.
    Back,
    /// Fullscreen was entered (`true`) or left (`false`).
    FullScreenChanged(bool),
}

#[derive(Debug, Clone, Copy)]
enum Timer {
    AutoHide,
    SingleTap,
    Notice,
}

/// The video playback overlay.
#[derive(Debug)]
pub struct OverlayPlayer<S: VideoSurface> {
    config: PlayerConfig,
    machine: Machine,
    visibility: visibility::State,
    seek: seek::State,
    tap: tap::State,
    animator: Animator,
    surface: Option<S>,
    pushed_props: SurfaceProps,
    insets: SafeAreaInsets,
    orientation_rx: Option<Receiver<Orientation>>,
    orientation_listener: Option<ListenerId>,
    notice: DelayedAction<String>,
    diagnostics: DiagnosticsCollector,
}

impl<S: VideoSurface> OverlayPlayer<S> {
    #[must_use]
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_diagnostics_capacity(config, BufferCapacity::default())
    }

    #[must_use]
    pub fn with_diagnostics_capacity(config: PlayerConfig, capacity: BufferCapacity) -> Self {
        let machine = Machine::new(&config);
        Self {
            visibility: visibility::State::new(config.control_timeout),
            seek: seek::State::default(),
            tap: tap::State::new(config.tap_window),
            animator: Animator::new(config.animation),
            surface: None,
            pushed_props: SurfaceProps::from_state(machine.state()),
            insets: SafeAreaInsets::default(),
            orientation_rx: None,
            orientation_listener: None,
            notice: DelayedAction::new(),
            diagnostics: DiagnosticsCollector::new(capacity),
            machine,
            config,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Subscribes to orientation changes and reads the safe-area insets.
    ///
    /// Mounting twice replaces the previous subscription.
    pub fn mount(
        &mut self,
        orientation: &mut dyn OrientationProvider,
        insets: &dyn InsetProvider,
    ) {
        if let Some(id) = self.orientation_listener.take() {
            orientation.unsubscribe(id);
        }
        let (tx, rx) = bounded(ORIENTATION_QUEUE_CAPACITY);
        self.machine.set_orientation(orientation.initial_orientation());
        self.orientation_listener = Some(orientation.subscribe(tx));
        self.orientation_rx = Some(rx);
        self.insets = insets.insets();
    }

    /// Unsubscribes, detaches the surface and returns to the mount-time state.
    pub fn unmount(&mut self, orientation: &mut dyn OrientationProvider) -> Option<S> {
        if let Some(id) = self.orientation_listener.take() {
            orientation.unsubscribe(id);
        }
        self.orientation_rx = None;

        self.machine = Machine::new(&self.config);
        self.visibility = visibility::State::new(self.config.control_timeout);
        self.seek = seek::State::default();
        self.tap = tap::State::new(self.config.tap_window);
        self.animator = Animator::new(self.config.animation);
        self.notice.cancel();
        self.pushed_props = SurfaceProps::from_state(self.machine.state());

        self.surface.take()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.orientation_listener.is_some()
    }

    /// Attaches a surface, pushes every prop and loads the current source.
    ///
    /// Returns the previously attached surface, if any.
    pub fn attach_surface(&mut self, mut surface: S, now: Instant) -> Option<S> {
        let props = SurfaceProps::from_state(self.machine.state());
        props.push_all(&mut surface);
        surface.load(&self.config.source);
        self.pushed_props = props;
        self.diagnostics
            .log_state(PlaybackEvent::SurfaceAttached, now);
        self.surface.replace(surface)
    }

    pub fn detach_surface(&mut self, now: Instant) -> Option<S> {
        let surface = self.surface.take();
        if surface.is_some() {
            self.diagnostics
                .log_state(PlaybackEvent::SurfaceDetached, now);
        }
        surface
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    // ------------------------------------------------------------------
    // Update loop
    // ------------------------------------------------------------------

    /// Runs everything that became due up to `now`.
    ///
    /// Orientation changes are drained first, then timers fire in deadline
    /// order. Each timer runs at its own deadline, so effects it schedules
    /// are measured from when it was due rather than from `now`.
    pub fn tick(&mut self, now: Instant) {
        self.diagnostics.process_pending();
        self.drain_orientation(now);

        while let Some((deadline, timer)) = self.next_due(now) {
            match timer {
                Timer::AutoHide => {
                    let effect = self.visibility.poll(deadline);
                    self.apply_visibility_effect(effect, deadline);
                }
                Timer::SingleTap => {
                    if self.tap.poll(deadline) == tap::Effect::SingleTap {
                        self.diagnostics
                            .log_action(UserAction::ToggleControls, deadline);
                        let effect = self
                            .visibility
                            .handle(visibility::Message::Toggle, deadline);
                        self.apply_visibility_effect(effect, deadline);
                    }
                }
                Timer::Notice => {
                    self.notice.poll(deadline);
                }
            }
        }

        self.sync_props();
    }

    /// Handle an overlay message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, message: Message, now: Instant) -> Effect {
        self.tick(now);

        let effect = match message {
            Message::Surface(event) => {
                self.handle_surface_event(event, now);
                Effect::None
            }
            Message::SeekPointer(pointer) => {
                self.handle_seek_pointer(pointer, now);
                Effect::None
            }
            Message::Tap => self.handle_tap(now),
            Message::TogglePlayPause => {
                self.diagnostics
                    .log_action(UserAction::TogglePlayback, now);
                // Mid-drag, the toggle retargets what the release resumes.
                self.seek.toggle_resume();
                let outcome = self.machine.toggle_play_pause();
                self.apply(outcome, now);
                Effect::None
            }
            Message::ToggleFullScreen => self.toggle_full_screen(now),
            Message::ToggleTimeDisplay => {
                self.diagnostics
                    .log_action(UserAction::ToggleTimeDisplay, now);
                let outcome = self.machine.toggle_time_display();
                self.apply(outcome, now);
                Effect::None
            }
            Message::Back => {
                self.diagnostics.log_action(UserAction::Back, now);
                Effect::Back
            }
            Message::SetSource(source) => {
                self.diagnostics.log_action(UserAction::ChangeSource, now);
                let resume_playing = self.seek.cancel().map(|session| session.was_playing);
                self.config.source = source.clone();
                let outcome = self.machine.set_source(source, resume_playing);
                self.apply(outcome, now);
                Effect::None
            }
            Message::InsetsChanged(insets) => {
                self.insets = insets;
                Effect::None
            }
        };

        self.sync_props();
        effect
    }

    fn handle_surface_event(&mut self, event: SurfaceEvent, now: Instant) {
        let outcome = match event {
            SurfaceEvent::LoadStart => {
                self.diagnostics
                    .log_state(PlaybackEvent::LoadStarted, now);
                self.machine.on_load_start()
            }
            SurfaceEvent::Load { duration } => {
                let outcome = self.machine.on_load(duration);
                self.diagnostics.log_state(
                    PlaybackEvent::Loaded {
                        duration_secs: self.machine.state().duration,
                    },
                    now,
                );
                outcome
            }
            SurfaceEvent::Progress { current_time } => self.machine.on_progress(current_time),
            SurfaceEvent::Error(error) => {
                self.diagnostics.log_error(error.to_string(), now);
                self.machine.on_error(error)
            }
            SurfaceEvent::End => {
                self.diagnostics.log_state(
                    PlaybackEvent::Ended {
                        looped: self.config.loop_enabled,
                    },
                    now,
                );
                self.machine.on_end()
            }
        };
        self.apply(outcome, now);
    }

    fn handle_seek_pointer(&mut self, pointer: SeekPointer, now: Instant) {
        let message = match pointer {
            SeekPointer::Pressed { x, width } => {
                self.seek.set_track_width(width);
                let state = self.machine.state();
                seek::Message::Grant {
                    x,
                    progress: state.seeker_progress,
                    is_playing: state.is_playing,
                }
            }
            SeekPointer::Moved { x, width } => {
                self.seek.set_track_width(width);
                seek::Message::Move { x }
            }
            SeekPointer::Released => seek::Message::Release,
            SeekPointer::Left => seek::Message::Terminate,
        };

        let outcome = match self.seek.handle(message) {
            seek::Effect::Began => {
                self.diagnostics.log_action(
                    UserAction::SeekStart {
                        progress: self.machine.state().seeker_progress.value(),
                    },
                    now,
                );
                self.machine.begin_seek()
            }
            seek::Effect::Moved(progress) => self.machine.seek_to(progress),
            seek::Effect::Ended { resume_playing } => {
                let state = self.machine.state();
                self.diagnostics.log_action(
                    UserAction::SeekEnd {
                        position_secs: state.seeker_progress.to_position(state.duration),
                    },
                    now,
                );
                self.machine.end_seek(resume_playing)
            }
            seek::Effect::Rejected(error) => {
                self.diagnostics
                    .log_warning(format!("seek input ignored: {error}"), now);
                Outcome::none()
            }
        };
        self.apply(outcome, now);
    }

    fn handle_tap(&mut self, now: Instant) -> Effect {
        match self.tap.tap(now) {
            tap::Effect::DoubleTap => self.toggle_full_screen(now),
            tap::Effect::None | tap::Effect::SingleTap => Effect::None,
        }
    }

    fn toggle_full_screen(&mut self, now: Instant) -> Effect {
        self.diagnostics
            .log_action(UserAction::ToggleFullscreen, now);
        if self.machine.toggle_full_screen() {
            Effect::FullScreenChanged(self.machine.state().is_full_screen)
        } else {
            self.diagnostics
                .log_warning("fullscreen is pinned by the cover resize mode", now);
            Effect::None
        }
    }

    fn drain_orientation(&mut self, now: Instant) {
        let Some(rx) = self.orientation_rx.as_ref() else {
            return;
        };
        let changes: Vec<Orientation> = rx.try_iter().collect();
        for orientation in changes {
            if orientation != self.machine.state().orientation {
                self.machine.set_orientation(orientation);
                self.diagnostics
                    .log_state(PlaybackEvent::OrientationChanged { orientation }, now);
            }
        }
    }

    /// Earliest timer due at or before `now`. Auto-hide wins ties, then the tap.
    fn next_due(&self, now: Instant) -> Option<(Instant, Timer)> {
        [
            self.visibility
                .hide_deadline()
                .map(|deadline| (deadline, Timer::AutoHide)),
            self.tap
                .pending_deadline()
                .map(|deadline| (deadline, Timer::SingleTap)),
            self.notice
                .deadline()
                .map(|deadline| (deadline, Timer::Notice)),
        ]
        .into_iter()
        .flatten()
        .filter(|(deadline, _)| *deadline <= now)
        .min_by_key(|(deadline, _)| *deadline)
    }

    fn apply(&mut self, outcome: Outcome, now: Instant) {
        for command in outcome.commands {
            let Some(surface) = self.surface.as_mut() else {
                continue;
            };
            match command {
                SurfaceCommand::Seek(seconds) => surface.seek(seconds),
                SurfaceCommand::Load(source) => surface.load(&source),
            }
        }

        if let Some(request) = outcome.visibility {
            let message = match request {
                VisibilityRequest::Reset => visibility::Message::Reset,
                VisibilityRequest::Show { auto_hide } => visibility::Message::Show { auto_hide },
                VisibilityRequest::Hide => visibility::Message::Hide,
            };
            let effect = self.visibility.handle(message, now);
            self.apply_visibility_effect(effect, now);
        }
    }

    fn apply_visibility_effect(&mut self, effect: visibility::Effect, now: Instant) {
        let visibility::Effect::VisibilityChanged(visible) = effect else {
            return;
        };
        let was_visible = self.machine.state().is_controls_visible;
        self.machine.set_controls_visible(visible);
        self.animator.animate_to(visible, now);

        if was_visible != visible {
            let event = if visible {
                PlaybackEvent::ControlsShown
            } else {
                PlaybackEvent::ControlsHidden
            };
            self.diagnostics.log_state(event, now);
        }
    }

    fn sync_props(&mut self) {
        let props = SurfaceProps::from_state(self.machine.state());
        if let Some(surface) = self.surface.as_mut() {
            props.push_changes(&self.pushed_props, surface);
        }
        self.pushed_props = props;
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        self.machine.state()
    }

    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    #[must_use]
    pub fn insets(&self) -> SafeAreaInsets {
        self.insets
    }

    #[must_use]
    pub fn gesture(&self) -> Option<&crate::controls::GestureSession> {
        self.seek.session()
    }

    /// Earliest pending timer deadline, due or not.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.visibility.hide_deadline(),
            self.tap.pending_deadline(),
            self.notice.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Returns true while a timer is pending or an animation is running.
    #[must_use]
    pub fn needs_ticks(&self, now: Instant) -> bool {
        self.next_deadline().is_some() || self.animator.is_animating(now)
    }

    #[must_use]
    pub fn view_model(&self, now: Instant) -> OverlayViewModel {
        OverlayViewModel {
            notice: self.notice.pending().cloned(),
            ..OverlayViewModel::build(
                self.machine.state(),
                self.animator.frame(now),
                self.insets,
                self.animator.target_visible(),
            )
        }
    }

    /// Shows `message` on the overlay for a few seconds, replacing any notice.
    pub fn show_notice(&mut self, message: impl Into<String>, now: Instant) {
        self.notice.arm(
            now,
            Duration::from_millis(NOTICE_DURATION_MS),
            message.into(),
        );
    }

    /// Records `message` as a warning and shows it as a notice.
    pub fn warn(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        self.diagnostics.log_warning(message.clone(), now);
        self.show_notice(message, now);
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Handle for logging into this player's activity log from elsewhere.
    #[must_use]
    pub fn diagnostics_handle(&self) -> DiagnosticsHandle {
        self.diagnostics.handle()
    }
}
