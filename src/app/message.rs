// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::domain::video::ResizeMode;
use crate::player;
use iced::{window, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input from the overlay widgets.
    Player(player::Message),
    /// Frame clock, active only while something is moving.
    Tick(Instant),
    WindowOpened {
        id: window::Id,
        size: Size,
    },
    WindowResized {
        id: window::Id,
        size: Size,
    },
    /// Write the activity log to the export directory.
    ExportDiagnostics,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Media source; overrides the configured one.
    pub source: Option<String>,
    /// Force looping on.
    pub loop_enabled: bool,
    /// Start in fullscreen.
    pub full_screen: bool,
    pub resize_mode: Option<ResizeMode>,
    /// Length of the simulated media in seconds.
    pub duration_secs: Option<f64>,
    /// Explicit settings file; takes precedence over the config directory.
    pub config_path: Option<PathBuf>,
}
