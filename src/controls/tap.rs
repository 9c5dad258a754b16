// SPDX-License-Identifier: MPL-2.0
//! Single versus double tap on the video area.
//!
//! A second tap inside the window is a double tap and acts at once; the
//! first tap's action waits for the window to close so that it can be
//! suppressed. Both rules share one [`TapWindow`].

use crate::domain::ui::TapWindow;
use crate::timer::DelayedAction;
use std::time::Instant;

/// Tap disambiguation state.
#[derive(Debug, Clone, Default)]
pub struct State {
    last_tap: Option<Instant>,
    pending_single: DelayedAction<()>,
    window: TapWindow,
}

/// Effects produced by taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do yet.
    None,
    /// A single tap was confirmed (window elapsed without a second tap).
    SingleTap,
    /// Two taps landed inside the window.
    DoubleTap,
}

impl State {
    #[must_use]
    pub fn new(window: TapWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Registers a tap at `now`.
    ///
    /// A new tap always replaces the pending single-tap action.
    pub fn tap(&mut self, now: Instant) -> Effect {
        self.pending_single.cancel();

        let is_double = self
            .last_tap
            .is_some_and(|last| now.saturating_duration_since(last) < self.window.as_duration());

        if is_double {
            // A third quick tap starts a new sequence.
            self.last_tap = None;
            Effect::DoubleTap
        } else {
            self.last_tap = Some(now);
            self.pending_single.arm(now, self.window.as_duration(), ());
            Effect::None
        }
    }

    /// Confirms the pending single tap once the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Effect {
        match self.pending_single.poll(now) {
            Some(()) => Effect::SingleTap,
            None => Effect::None,
        }
    }

    #[must_use]
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending_single.deadline()
    }

    #[must_use]
    pub fn window(&self) -> TapWindow {
        self.window
    }
}
