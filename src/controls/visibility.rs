// SPDX-License-Identifier: MPL-2.0
//! Control visibility sub-component with inactivity auto-hide.
//!
//! Holds the visibility flag and a single pending hide. Every interaction
//! re-arms the hide so the full delay is measured from the latest one.

use crate::domain::ui::ControlTimeout;
use crate::timer::DelayedAction;
use std::time::Instant;

/// Visibility state for the control overlay.
#[derive(Debug, Clone)]
pub struct State {
    visible: bool,
    hide_timer: DelayedAction<()>,
    timeout: ControlTimeout,
}

/// Messages for the visibility sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Show the overlay; arm auto-hide when requested, otherwise cancel it.
    Show { auto_hide: bool },
    /// Hide the overlay and cancel any pending hide.
    Hide,
    /// Restart the inactivity delay.
    Reset,
    /// Flip visibility (single tap).
    Toggle,
}

/// Effects produced by visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The overlay was asked to become visible (`true`) or hidden (`false`).
    VisibilityChanged(bool),
}

impl Default for State {
    fn default() -> Self {
        Self::new(ControlTimeout::default())
    }
}

impl State {
    /// Creates a visible overlay with nothing pending.
    #[must_use]
    pub fn new(timeout: ControlTimeout) -> Self {
        Self {
            visible: true,
            hide_timer: DelayedAction::new(),
            timeout,
        }
    }

    /// Handle a visibility message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        match msg {
            Message::Show { auto_hide } => self.show(auto_hide, now),
            Message::Hide => self.hide(),
            Message::Reset => {
                self.reset(now);
                Effect::None
            }
            Message::Toggle => {
                if self.visible {
                    self.hide()
                } else {
                    self.show(true, now)
                }
            }
        }
    }

    pub fn show(&mut self, auto_hide: bool, now: Instant) -> Effect {
        self.visible = true;
        if auto_hide {
            self.hide_timer.arm(now, self.timeout.as_duration(), ());
        } else {
            self.hide_timer.cancel();
        }
        Effect::VisibilityChanged(true)
    }

    pub fn hide(&mut self) -> Effect {
        self.visible = false;
        self.hide_timer.cancel();
        Effect::VisibilityChanged(false)
    }

    /// Cancels the pending hide and arms a fresh one from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.hide_timer.arm(now, self.timeout.as_duration(), ());
    }

    /// Fires the auto-hide once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Effect {
        match self.hide_timer.poll(now) {
            Some(()) => self.hide(),
            None => Effect::None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns when the pending hide fires, if one is armed.
    #[must_use]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_timer.deadline()
    }

    #[must_use]
    pub fn timeout(&self) -> ControlTimeout {
        self.timeout
    }
}
