// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot delayed actions.
//!
//! A [`DelayedAction`] owns at most one pending action. Arming it replaces
//! whatever was pending, so two timers of the same kind can never coexist.
//! Nothing runs on its own: the owner polls with the current time and
//! receives the action once its deadline has passed.

use std::time::{Duration, Instant};

/// Slot holding at most one pending action and its deadline.
#[derive(Debug, Clone)]
pub struct DelayedAction<A> {
    pending: Option<(Instant, A)>,
}

impl<A> Default for DelayedAction<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> DelayedAction<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to fire `delay` after `now`, dropping any pending one.
    pub fn arm(&mut self, now: Instant, delay: Duration, action: A) {
        self.pending = Some((now + delay, action));
    }

    /// Drops the pending action, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns the pending action once its deadline is reached, disarming the slot.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        match self.pending {
            Some((deadline, _)) if now >= deadline => self.pending.take().map(|(_, a)| a),
            _ => None,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// The action waiting to fire, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&A> {
        self.pending.as_ref().map(|(_, action)| action)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn fires_once_after_deadline() {
        let start = Instant::now();
        let mut timer = DelayedAction::new();
        timer.arm(start, DELAY, "hide");

        assert_eq!(timer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(timer.poll(start + DELAY), Some("hide"));
        assert_eq!(timer.poll(start + DELAY * 2), None);
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearming_replaces_pending_action() {
        let start = Instant::now();
        let mut timer = DelayedAction::new();
        timer.arm(start, DELAY, 1);
        timer.arm(start + Duration::from_millis(100), DELAY, 2);

        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(400)));
        assert_eq!(timer.poll(start + DELAY), None);
        assert_eq!(timer.poll(start + Duration::from_millis(400)), Some(2));
    }

    #[test]
    fn pending_action_is_readable_until_it_fires() {
        let start = Instant::now();
        let mut timer = DelayedAction::new();
        timer.arm(start, DELAY, "notice");

        assert_eq!(timer.pending(), Some(&"notice"));
        assert_eq!(timer.poll(start + DELAY), Some("notice"));
        assert_eq!(timer.pending(), None);
    }

    #[test]
    fn cancel_disarms() {
        let start = Instant::now();
        let mut timer = DelayedAction::new();
        timer.arm(start, DELAY, ());
        timer.cancel();

        assert!(!timer.is_armed());
        assert_eq!(timer.deadline(), None);
        assert_eq!(timer.poll(start + DELAY), None);
    }

    #[test]
    fn cancel_without_pending_is_noop() {
        let mut timer: DelayedAction<()> = DelayedAction::default();
        timer.cancel();
        assert!(!timer.is_armed());
    }
}
