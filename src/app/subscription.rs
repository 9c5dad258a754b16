// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.
//!
//! Window events feed orientation and the window id; keyboard shortcuts map
//! onto overlay messages or the diagnostics export. The frame tick only runs while the overlay or the
//! simulated surface has something time-driven in flight.

use super::Message;
use crate::player;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window and keyboard events.
///
/// Keyboard events already captured by a widget are ignored.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. }) => Some(Message::WindowOpened {
            id: window_id,
            size,
        }),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            id: window_id,
            size,
        }),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            shortcut(&key)
        }
        _ => None,
    })
}

/// Maps a key to an application message.
#[must_use]
pub fn shortcut(key: &Key) -> Option<Message> {
    let message = match key.as_ref() {
        Key::Named(Named::Space) => player::Message::TogglePlayPause,
        Key::Named(Named::Escape) => player::Message::Back,
        Key::Character("f" | "F") => player::Message::ToggleFullScreen,
        Key::Character("t" | "T") => player::Message::ToggleTimeDisplay,
        Key::Character("d" | "D") => return Some(Message::ExportDiagnostics),
        _ => return None,
    };
    Some(Message::Player(message))
}

/// Creates the frame tick subscription when `active`.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_action(key: &Key) -> Option<player::Message> {
        match shortcut(key) {
            Some(Message::Player(message)) => Some(message),
            _ => None,
        }
    }

    #[test]
    fn space_toggles_playback() {
        assert_eq!(
            player_action(&Key::Named(Named::Space)),
            Some(player::Message::TogglePlayPause)
        );
    }

    #[test]
    fn f_toggles_full_screen_in_either_case() {
        assert_eq!(
            player_action(&Key::Character("f".into())),
            Some(player::Message::ToggleFullScreen)
        );
        assert_eq!(
            player_action(&Key::Character("F".into())),
            Some(player::Message::ToggleFullScreen)
        );
    }

    #[test]
    fn d_exports_diagnostics() {
        assert!(matches!(
            shortcut(&Key::Character("d".into())),
            Some(Message::ExportDiagnostics)
        ));
        assert!(matches!(
            shortcut(&Key::Character("D".into())),
            Some(Message::ExportDiagnostics)
        ));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert!(shortcut(&Key::Character("x".into())).is_none());
    }
}
