// SPDX-License-Identifier: MPL-2.0
//! Device orientation as an injected capability.
//!
//! The player subscribes when it mounts and unsubscribes when it unmounts.
//! Changes arrive through a bounded channel the player drains on its own
//! thread, so providers may push from anywhere.

use crate::domain::video::Orientation;
use crossbeam_channel::{Sender, TrySendError};

/// Handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Source of orientation changes.
pub trait OrientationProvider {
    /// Orientation at the time the player mounts.
    fn initial_orientation(&self) -> Orientation;

    /// Registers `sender` to receive every later change.
    fn subscribe(&mut self, sender: Sender<Orientation>) -> ListenerId;

    /// Stops sending to the listener. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: ListenerId);
}

/// Provider whose orientation is set by the host, e.g. from window size.
#[derive(Debug, Default)]
pub struct ManualOrientation {
    current: Orientation,
    listeners: Vec<(ListenerId, Sender<Orientation>)>,
    next_id: u64,
}

impl ManualOrientation {
    #[must_use]
    pub fn new(initial: Orientation) -> Self {
        Self {
            current: initial,
            ..Self::default()
        }
    }

    /// Picks the orientation matching a viewport: landscape when wider than tall.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Orientation {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Updates the orientation and notifies listeners if it changed.
    ///
    /// Listeners whose receiver is gone are dropped. A full queue drops the
    /// notification for that listener only.
    pub fn set(&mut self, orientation: Orientation) {
        if orientation == self.current {
            return;
        }
        self.current = orientation;
        self.listeners
            .retain(|(_, sender)| match sender.try_send(orientation) {
                Ok(()) | Err(TrySendError::Full(_)) => true,
                Err(TrySendError::Disconnected(_)) => false,
            });
    }

    #[must_use]
    pub fn current(&self) -> Orientation {
        self.current
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl OrientationProvider for ManualOrientation {
    fn initial_orientation(&self) -> Orientation {
        self.current
    }

    fn subscribe(&mut self, sender: Sender<Orientation>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, sender));
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener, _)| *listener != id);
    }
}
