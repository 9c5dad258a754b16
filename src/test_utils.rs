// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Float assertions come from `approx`; timing tests build their clocks from
//! a fixed `Instant` plus [`ms`] offsets.

pub use approx::assert_abs_diff_eq;

use std::time::Duration;

/// Shorthand for `Duration::from_millis`.
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
