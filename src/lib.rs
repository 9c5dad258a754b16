// SPDX-License-Identifier: MPL-2.0
//! `iced_playback_overlay` provides auto-hiding video playback controls built
//! with the Iced GUI framework.
//!
//! The core (playback state machine, seek gesture, tap disambiguation,
//! visibility timer and animator) is toolkit independent and driven by
//! explicit timestamps. [`player::OverlayPlayer`] wires it to any
//! [`surface::VideoSurface`]; [`ui`] renders it with Iced, and [`app`] runs a
//! demo on top of a simulated surface.

#![doc(html_root_url = "https://docs.rs/iced_playback_overlay/0.1.0")]

pub mod app;
pub mod config;
pub mod controls;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod layout;
pub mod orientation;
pub mod playback;
pub mod player;
pub mod surface;
pub mod timer;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
