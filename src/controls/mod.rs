// SPDX-License-Identifier: MPL-2.0
//! Input and presentation sub-components of the overlay.
//!
//! Each sub-component owns its own state and reports what happened as an
//! effect; none of them reaches into another. The orchestrator in
//! [`crate::player`] routes effects between them.

pub mod animator;
pub mod seek;
pub mod tap;
pub mod visibility;

pub use animator::{Animator, GroupFrame, OverlayFrame};
pub use seek::GestureSession;
