// SPDX-License-Identifier: MPL-2.0
//! Iced presentation layer for the overlay.
//!
//! Everything here is a pure function of [`crate::player::OverlayViewModel`];
//! pointer input comes back as [`crate::player::Message`] values.

pub mod design_tokens;
pub mod overlay;
pub mod seek_bar;
pub mod styles;
pub mod widgets;
