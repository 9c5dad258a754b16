// SPDX-License-Identifier: MPL-2.0
//! Clock-driven stand-in for a real playback engine.
//!
//! [`SimulatedSurface`] plays a media of fixed length without decoding
//! anything. The host calls [`advance`](SimulatedSurface::advance) with the
//! current time and forwards the returned events to the player, exactly as it
//! would forward callbacks from a real engine.
//!
//! Sources whose location is blank or starts with `error:` fail to load.

use super::{SurfaceEvent, VideoSurface};
use crate::domain::video::{PlaybackRate, ResizeMode, Source, Volume};
use crate::error::SurfaceError;
use std::time::{Duration, Instant};

/// Default simulated media length in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 90.0;

/// Default delay between `load()` and the `Load` event.
pub const DEFAULT_LOAD_LATENCY: Duration = Duration::from_millis(400);

/// Default interval between two `Progress` events while playing.
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(250);

/// Prefix marking a source that cannot be loaded.
const FAILING_SOURCE_PREFIX: &str = "error:";

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Loading {
        source: Source,
        since: Option<Instant>,
    },
    Ready,
    Ended,
    Failed,
}

/// Deterministic surface driven by explicit timestamps.
#[derive(Debug, Clone)]
pub struct SimulatedSurface {
    duration: f64,
    load_latency: Duration,
    progress_interval: Duration,
    fail_at: Option<f64>,
    phase: Phase,
    position: f64,
    paused: bool,
    volume: Volume,
    muted: bool,
    rate: PlaybackRate,
    resize_mode: ResizeMode,
    queued: Vec<SurfaceEvent>,
    last_advance: Option<Instant>,
    last_progress: Option<Instant>,
}

impl Default for SimulatedSurface {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl SimulatedSurface {
    /// Creates an idle surface whose media lasts `duration_secs`.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        let duration = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            DEFAULT_DURATION_SECS
        };
        Self {
            duration,
            load_latency: DEFAULT_LOAD_LATENCY,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            fail_at: None,
            phase: Phase::Idle,
            position: 0.0,
            paused: false,
            volume: Volume::default(),
            muted: false,
            rate: PlaybackRate::default(),
            resize_mode: ResizeMode::default(),
            queued: Vec::new(),
            last_advance: None,
            last_progress: None,
        }
    }

    /// Sets the delay between `load()` and the `Load` event.
    #[must_use]
    pub fn with_load_latency(mut self, latency: Duration) -> Self {
        self.load_latency = latency;
        self
    }

    /// Sets how often `Progress` is reported while playing.
    #[must_use]
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Makes playback fail once the playhead passes `seconds`.
    #[must_use]
    pub fn with_failure_at(mut self, seconds: f64) -> Self {
        self.fail_at = Some(seconds);
        self
    }

    /// Moves the simulated clock to `now` and returns the events produced.
    pub fn advance(&mut self, now: Instant) -> Vec<SurfaceEvent> {
        let mut events = std::mem::take(&mut self.queued);
        let elapsed = self
            .last_advance
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_advance = Some(now);

        match &mut self.phase {
            Phase::Loading { since, source } => match since {
                None => *since = Some(now),
                Some(started) if now.saturating_duration_since(*started) >= self.load_latency => {
                    if source.is_empty() || source.as_str().starts_with(FAILING_SOURCE_PREFIX) {
                        let message = format!("cannot open '{}'", source);
                        self.phase = Phase::Failed;
                        events.push(SurfaceEvent::Error(SurfaceError::Load(message)));
                    } else {
                        self.phase = Phase::Ready;
                        self.last_progress = Some(now);
                        events.push(SurfaceEvent::Load {
                            duration: self.duration,
                        });
                    }
                }
                Some(_) => {}
            },
            Phase::Ready if !self.paused => self.play_for(elapsed, now, &mut events),
            Phase::Idle | Phase::Ready | Phase::Ended | Phase::Failed => {}
        }

        events
    }

    fn play_for(&mut self, elapsed: Duration, now: Instant, events: &mut Vec<SurfaceEvent>) {
        self.position += elapsed.as_secs_f64() * self.rate.value();

        if let Some(fail_at) = self.fail_at {
            if self.position >= fail_at {
                self.position = fail_at.min(self.duration);
                self.phase = Phase::Failed;
                events.push(SurfaceEvent::Error(SurfaceError::Playback(format!(
                    "stream interrupted at {:.1}s",
                    self.position
                ))));
                return;
            }
        }

        if self.position >= self.duration {
            self.position = self.duration;
            self.phase = Phase::Ended;
            events.push(SurfaceEvent::Progress {
                current_time: self.duration,
            });
            events.push(SurfaceEvent::End);
            return;
        }

        let due = self
            .last_progress
            .is_none_or(|last| now.saturating_duration_since(last) >= self.progress_interval);
        if due {
            self.last_progress = Some(now);
            events.push(SurfaceEvent::Progress {
                current_time: self.position,
            });
        }
    }

    /// Returns true while the surface has work that needs clock ticks.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.queued.is_empty()
            || matches!(self.phase, Phase::Loading { .. })
            || (self.phase == Phase::Ready && !self.paused)
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    #[must_use]
    pub fn resize_mode(&self) -> ResizeMode {
        self.resize_mode
    }
}

impl VideoSurface for SimulatedSurface {
    fn load(&mut self, source: &Source) {
        self.phase = Phase::Loading {
            source: source.clone(),
            since: None,
        };
        self.position = 0.0;
        self.last_progress = None;
        self.queued.clear();
        self.queued.push(SurfaceEvent::LoadStart);
    }

    fn seek(&mut self, seconds: f64) {
        let target = if seconds.is_finite() { seconds } else { 0.0 };
        self.position = target.clamp(0.0, self.duration);
        if self.phase == Phase::Ended && self.position < self.duration {
            self.phase = Phase::Ready;
        }
        if self.phase == Phase::Ready {
            self.last_progress = self.last_advance;
            self.queued.push(SurfaceEvent::Progress {
                current_time: self.position,
            });
        }
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn set_resize_mode(&mut self, mode: ResizeMode) {
        self.resize_mode = mode;
    }

    fn set_rate(&mut self, rate: PlaybackRate) {
        self.rate = rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, ms};

    fn ready(duration: f64, start: Instant) -> SimulatedSurface {
        let mut surface = SimulatedSurface::new(duration).with_load_latency(Duration::ZERO);
        surface.load(&Source::new("clip.mp4"));
        let _ = surface.advance(start);
        let _ = surface.advance(start);
        surface
    }

    #[test]
    fn load_reports_start_then_duration() {
        let start = Instant::now();
        let mut surface = SimulatedSurface::new(30.0).with_load_latency(ms(100));
        surface.load(&Source::new("clip.mp4"));

        assert_eq!(surface.advance(start), vec![SurfaceEvent::LoadStart]);
        assert!(surface.advance(start + ms(50)).is_empty());
        assert_eq!(
            surface.advance(start + ms(100)),
            vec![SurfaceEvent::Load { duration: 30.0 }]
        );
    }

    #[test]
    fn failing_source_reports_load_error() {
        let start = Instant::now();
        let mut surface = SimulatedSurface::new(30.0).with_load_latency(Duration::ZERO);
        surface.load(&Source::new("error:missing.mp4"));
        let _ = surface.advance(start);

        let events = surface.advance(start);
        assert!(matches!(
            events.as_slice(),
            [SurfaceEvent::Error(SurfaceError::Load(_))]
        ));
        assert!(!surface.is_active());
    }

    #[test]
    fn playing_reports_progress_scaled_by_rate() {
        let start = Instant::now();
        let mut surface = ready(30.0, start);
        surface.set_rate(PlaybackRate::new(2.0));

        let events = surface.advance(start + ms(500));
        assert_eq!(events, vec![SurfaceEvent::Progress { current_time: 1.0 }]);
    }

    #[test]
    fn paused_surface_does_not_move() {
        let start = Instant::now();
        let mut surface = ready(30.0, start);
        surface.set_paused(true);

        assert!(surface.advance(start + ms(1000)).is_empty());
        assert_abs_diff_eq!(surface.position(), 0.0);
        assert!(!surface.is_active());
    }

    #[test]
    fn reaching_the_end_emits_end() {
        let start = Instant::now();
        let mut surface = ready(1.0, start);

        let events = surface.advance(start + ms(1500));
        assert_eq!(
            events,
            vec![
                SurfaceEvent::Progress { current_time: 1.0 },
                SurfaceEvent::End
            ]
        );
        assert!(!surface.is_active());
    }

    #[test]
    fn seek_after_end_resumes_and_reports_position() {
        let start = Instant::now();
        let mut surface = ready(1.0, start);
        let _ = surface.advance(start + ms(1500));

        surface.seek(0.0);
        assert_eq!(
            surface.advance(start + ms(1500)),
            vec![SurfaceEvent::Progress { current_time: 0.0 }]
        );
        assert!(surface.is_active());
    }

    #[test]
    fn configured_failure_interrupts_playback() {
        let start = Instant::now();
        let mut surface = ready(10.0, start).with_failure_at(2.0);

        let events = surface.advance(start + ms(3000));
        assert!(matches!(
            events.as_slice(),
            [SurfaceEvent::Error(SurfaceError::Playback(_))]
        ));
    }

    #[test]
    fn props_are_stored() {
        let mut surface = SimulatedSurface::default();
        surface.set_volume(Volume::new(0.3));
        surface.set_muted(true);
        surface.set_resize_mode(ResizeMode::Stretch);

        assert_abs_diff_eq!(surface.volume().value(), 0.3);
        assert!(surface.is_muted());
        assert_eq!(surface.resize_mode(), ResizeMode::Stretch);
    }
}
