// SPDX-License-Identifier: MPL-2.0
//! Activity log of the overlay player.
//!
//! The player logs straight into the collector with explicit timestamps.
//! Other parts of the program get a [`DiagnosticsHandle`] and send through a
//! bounded channel that the collector drains on [`process_pending`].
//!
//! [`process_pending`]: DiagnosticsCollector::process_pending

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::Serialize;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, PlaybackEvent,
    UserAction,
};

/// Events a handle can queue before `process_pending` runs.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Cloneable sender for code that does not own the collector.
///
/// Cheap to clone. Sending never blocks; events are dropped when the
/// channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        let _ = self.try_log(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_state(&self, state: PlaybackEvent) {
        let _ = self.try_log(DiagnosticEventKind::StateChange { state });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        let _ = self.try_log(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        let _ = self.try_log(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    /// Attempts to send an event, reporting whether it was queued.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(
        &self,
        kind: DiagnosticEventKind,
    ) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// One event in an exported report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEvent {
    /// Milliseconds since collection started.
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

/// JSON-exportable snapshot of the collected events.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub version: String,
    pub collection_started_at: String,
    pub generated_at: String,
    pub event_count: usize,
    pub events: Vec<ReportEvent>,
}

/// Owns the activity log and the receiving end of the handle channel.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for event offsets.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Returns a new sender into this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued handle event into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn log(&mut self, kind: DiagnosticEventKind, now: Instant) {
        self.buffer.push(DiagnosticEvent::with_timestamp(kind, now));
    }

    pub fn log_action(&mut self, action: UserAction, now: Instant) {
        self.log(DiagnosticEventKind::UserAction { action }, now);
    }

    pub fn log_state(&mut self, state: PlaybackEvent, now: Instant) {
        self.log(DiagnosticEventKind::StateChange { state }, now);
    }

    pub fn log_warning(&mut self, message: impl Into<String>, now: Instant) {
        self.log(
            DiagnosticEventKind::Warning {
                message: message.into(),
            },
            now,
        );
    }

    pub fn log_error(&mut self, message: impl Into<String>, now: Instant) {
        self.log(
            DiagnosticEventKind::Error {
                message: message.into(),
            },
            now,
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the most recent event.
    #[must_use]
    pub fn latest(&self) -> Option<&DiagnosticEvent> {
        self.buffer.latest()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report of the current buffer contents.
    #[allow(clippy::cast_possible_truncation)] // Offsets in ms fit comfortably in u64
    #[must_use]
    pub fn build_report(&self) -> DiagnosticReport {
        let events: Vec<ReportEvent> = self
            .buffer
            .iter()
            .map(|event| ReportEvent {
                offset_ms: event
                    .timestamp
                    .saturating_duration_since(self.collection_started_at)
                    .as_millis() as u64,
                kind: event.kind.clone(),
            })
            .collect();

        DiagnosticReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: self.collection_started_at_utc.to_rfc3339(),
            generated_at: Utc::now().to_rfc3339(),
            event_count: events.len(),
            events,
        }
    }

    /// Exports all collected events as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Fails only if `serde_json` cannot serialize the report.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }
}
