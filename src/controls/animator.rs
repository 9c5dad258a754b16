// SPDX-License-Identifier: MPL-2.0
//! Show/hide transition of the top and bottom control groups.
//!
//! Each group animates a margin offset and an opacity. A new target always
//! starts from the value's current interpolated position, so rapid toggles
//! converge on the latest target instead of queueing.

use crate::config::{HIDDEN_MARGIN, SHOWN_MARGIN};
use crate::domain::ui::AnimationDuration;
use std::time::{Duration, Instant};

/// A single eased value moving between two targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl AnimatedValue {
    /// Creates a value resting at `value`.
    #[must_use]
    pub fn at_rest(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            duration,
        }
    }

    /// Returns the interpolated value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(start) = self.started_at else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let t = now.saturating_duration_since(start).as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    /// Starts moving towards `target` from wherever the value is at `now`.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        self.from = self.value_at(now);
        self.to = target;
        self.started_at = Some(now);
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) < self.duration)
    }
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Rendered offset and opacity of one control group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupFrame {
    pub margin: f32,
    pub opacity: f32,
}

/// Snapshot of both groups at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub top: GroupFrame,
    pub bottom: GroupFrame,
}

/// Drives the four animated values of the overlay.
#[derive(Debug, Clone)]
pub struct Animator {
    top_margin: AnimatedValue,
    top_opacity: AnimatedValue,
    bottom_margin: AnimatedValue,
    bottom_opacity: AnimatedValue,
    visible: bool,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimationDuration::default())
    }
}

impl Animator {
    /// Creates an animator resting in the shown position.
    #[must_use]
    pub fn new(duration: AnimationDuration) -> Self {
        let duration = duration.as_duration();
        Self {
            top_margin: AnimatedValue::at_rest(SHOWN_MARGIN, duration),
            top_opacity: AnimatedValue::at_rest(1.0, duration),
            bottom_margin: AnimatedValue::at_rest(SHOWN_MARGIN, duration),
            bottom_opacity: AnimatedValue::at_rest(1.0, duration),
            visible: true,
        }
    }

    /// Animates every group towards the shown or hidden position.
    ///
    /// Asking for the current target again leaves a running animation alone.
    pub fn animate_to(&mut self, visible: bool, now: Instant) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        let (margin, opacity) = if visible {
            (SHOWN_MARGIN, 1.0)
        } else {
            (HIDDEN_MARGIN, 0.0)
        };
        self.top_margin.retarget(margin, now);
        self.top_opacity.retarget(opacity, now);
        self.bottom_margin.retarget(margin, now);
        self.bottom_opacity.retarget(opacity, now);
    }

    #[must_use]
    pub fn frame(&self, now: Instant) -> OverlayFrame {
        OverlayFrame {
            top: GroupFrame {
                margin: self.top_margin.value_at(now),
                opacity: self.top_opacity.value_at(now),
            },
            bottom: GroupFrame {
                margin: self.bottom_margin.value_at(now),
                opacity: self.bottom_opacity.value_at(now),
            },
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        [
            &self.top_margin,
            &self.top_opacity,
            &self.bottom_margin,
            &self.bottom_opacity,
        ]
        .iter()
        .any(|value| value.is_animating(now))
    }

    /// Returns the latest requested target.
    #[must_use]
    pub fn target_visible(&self) -> bool {
        self.visible
    }
}
