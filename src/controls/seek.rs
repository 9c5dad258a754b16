// SPDX-License-Identifier: MPL-2.0
//! Seek bar drag protocol.
//!
//! A grant opens a [`GestureSession`], moves translate the horizontal
//! pointer delta into a progress fraction of the measured track, and a
//! release (or terminate) closes the session and hands back the play
//! intent captured at grant. Malformed sequences are rejected with a
//! [`GestureInputError`] and leave the state untouched.

use crate::domain::video::SeekerProgress;
use crate::error::GestureInputError;

/// One drag interaction, from grant to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub start_x: f32,
    pub start_progress: SeekerProgress,
    pub was_playing: bool,
    pub track_width: f32,
}

/// Seek gesture state.
#[derive(Debug, Clone, Default)]
pub struct State {
    session: Option<GestureSession>,
    track_width: f32,
}

/// Pointer events on the seek bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Grant {
        x: f32,
        progress: SeekerProgress,
        is_playing: bool,
    },
    Move {
        x: f32,
    },
    Release,
    /// The pointer left the tracked region; handled like a release.
    Terminate,
}

/// Effects produced by the seek gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// A session opened.
    Began,
    /// The pointer moved the bar to a new position.
    Moved(SeekerProgress),
    /// The session closed; playback should resume if `resume_playing`.
    Ended { resume_playing: bool },
    /// The event did not fit the current state and was ignored.
    Rejected(GestureInputError),
}

impl State {
    /// Handle a pointer event.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        let result = match msg {
            Message::Grant {
                x,
                progress,
                is_playing,
            } => self.grant(x, progress, is_playing).map(|()| Effect::Began),
            Message::Move { x } => self.move_to(x).map(Effect::Moved),
            Message::Release | Message::Terminate => self
                .release()
                .map(|resume_playing| Effect::Ended { resume_playing }),
        };
        result.unwrap_or_else(Effect::Rejected)
    }

    /// Records the rendered track width in pixels.
    pub fn set_track_width(&mut self, width: f32) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.track_width = width;
        if let Some(session) = self.session.as_mut() {
            session.track_width = width;
        }
    }

    /// Opens a session at pointer `x`.
    ///
    /// # Errors
    ///
    /// [`GestureInputError::AlreadyActive`] if a session is already open.
    pub fn grant(
        &mut self,
        x: f32,
        progress: SeekerProgress,
        is_playing: bool,
    ) -> Result<(), GestureInputError> {
        if self.session.is_some() {
            return Err(GestureInputError::AlreadyActive);
        }
        self.session = Some(GestureSession {
            start_x: x,
            start_progress: progress,
            was_playing: is_playing,
            track_width: self.track_width,
        });
        Ok(())
    }

    /// Converts a pointer position into a clamped progress.
    ///
    /// # Errors
    ///
    /// [`GestureInputError::NoActiveGesture`] without a session, and
    /// [`GestureInputError::UnmeasuredTrack`] while the track width is zero.
    pub fn move_to(&mut self, x: f32) -> Result<SeekerProgress, GestureInputError> {
        let session = self.session.ok_or(GestureInputError::NoActiveGesture)?;
        if session.track_width <= 0.0 {
            return Err(GestureInputError::UnmeasuredTrack);
        }

        let ratio = 100.0 / f64::from(session.track_width);
        let delta = f64::from(x - session.start_x);
        Ok(SeekerProgress::new(
            session.start_progress.value() + ratio * delta / 100.0,
        ))
    }

    /// Closes the session and returns the play intent captured at grant.
    ///
    /// # Errors
    ///
    /// [`GestureInputError::NoActiveGesture`] without a session.
    pub fn release(&mut self) -> Result<bool, GestureInputError> {
        self.session
            .take()
            .map(|session| session.was_playing)
            .ok_or(GestureInputError::NoActiveGesture)
    }

    /// Flips the play intent the live session will hand back at release.
    ///
    /// Returns the new intent, or `None` without a session.
    pub fn toggle_resume(&mut self) -> Option<bool> {
        let session = self.session.as_mut()?;
        session.was_playing = !session.was_playing;
        Some(session.was_playing)
    }

    /// Drops the live session without a release, e.g. when the source changes.
    pub fn cancel(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn track_width(&self) -> f32 {
        self.track_width
    }
}
