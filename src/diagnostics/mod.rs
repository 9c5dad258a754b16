// SPDX-License-Identifier: MPL-2.0
//! Activity log for the player.
//!
//! Captures user actions, playback state changes, ignored input and surface
//! failures in a memory-bounded circular buffer that can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event
//! - [`DiagnosticsCollector`]: Owns the buffer; the player logs into it directly
//! - [`DiagnosticsHandle`]: Non-blocking sender for everyone else
//! - [`export`]: Timestamped JSON files written atomically

mod buffer;
mod collector;
mod events;
pub mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle, ReportEvent};
pub use events::{DiagnosticEvent, DiagnosticEventKind, PlaybackEvent, UserAction};
