// SPDX-License-Identifier: MPL-2.0
//! Surface double that records every command it receives.

use super::VideoSurface;
use crate::domain::video::{PlaybackRate, ResizeMode, Source, Volume};

/// One command received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Load(Source),
    Seek(f64),
    SetPaused(bool),
    SetVolume(Volume),
    SetMuted(bool),
    SetResizeMode(ResizeMode),
    SetRate(PlaybackRate),
}

/// In-memory surface for tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Positions of every seek received so far.
    #[must_use]
    pub fn seeks(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Seek(secs) => Some(*secs),
                _ => None,
            })
            .collect()
    }

    /// Last value pushed through `set_paused`, if any.
    #[must_use]
    pub fn last_paused(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetPaused(paused) => Some(*paused),
            _ => None,
        })
    }

    /// Last value pushed through `set_resize_mode`, if any.
    #[must_use]
    pub fn last_resize_mode(&self) -> Option<ResizeMode> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetResizeMode(mode) => Some(*mode),
            _ => None,
        })
    }

    /// Returns and forgets the calls recorded so far.
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl VideoSurface for RecordingSurface {
    fn load(&mut self, source: &Source) {
        self.calls.push(SurfaceCall::Load(source.clone()));
    }

    fn seek(&mut self, seconds: f64) {
        self.calls.push(SurfaceCall::Seek(seconds));
    }

    fn set_paused(&mut self, paused: bool) {
        self.calls.push(SurfaceCall::SetPaused(paused));
    }

    fn set_volume(&mut self, volume: Volume) {
        self.calls.push(SurfaceCall::SetVolume(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        self.calls.push(SurfaceCall::SetMuted(muted));
    }

    fn set_resize_mode(&mut self, mode: ResizeMode) {
        self.calls.push(SurfaceCall::SetResizeMode(mode));
    }

    fn set_rate(&mut self, rate: PlaybackRate) {
        self.calls.push(SurfaceCall::SetRate(rate));
    }
}
