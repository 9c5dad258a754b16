// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by the playback core and the overlay.
//!
//! These types hold no behaviour beyond validation. Apart from serde derives
//! on the enums that appear in configuration files, they depend only on `std`.
//!
//! # Modules
//!
//! - [`ui`]: Overlay timing values ([`ControlTimeout`](ui::ControlTimeout),
//!   [`TapWindow`](ui::TapWindow), [`AnimationDuration`](ui::AnimationDuration))
//! - [`video`]: Playback values ([`Volume`](video::Volume),
//!   [`PlaybackRate`](video::PlaybackRate), [`SeekerProgress`](video::SeekerProgress),
//!   [`ResizeMode`](video::ResizeMode), [`Orientation`](video::Orientation))

pub mod ui;
pub mod video;
