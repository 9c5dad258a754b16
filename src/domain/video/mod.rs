// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains video-related value objects and enums that are
//! independent of any presentation or surface implementation.

pub mod newtypes;
pub mod types;

// Re-export commonly used types
pub use newtypes::{PlaybackRate, SeekerProgress, Volume};
pub use types::{Orientation, ResizeMode, Source};
