// SPDX-License-Identifier: MPL-2.0
//! Render-ready snapshot of the overlay.
//!
//! Everything the presentation layer draws is computed here, so the `ui`
//! module only maps fields to widgets.

use crate::config::{KNOB_SCALE_ACTIVE, KNOB_SCALE_IDLE};
use crate::controls::OverlayFrame;
use crate::domain::video::{Orientation, ResizeMode};
use crate::layout::{control_paddings, ControlPaddings, SafeAreaInsets};
use crate::playback::{calculate_time, PlaybackState};

/// Derived overlay contents at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayViewModel {
    pub frame: OverlayFrame,
    pub paddings: ControlPaddings,
    pub orientation: Orientation,
    pub is_playing: bool,
    /// Seek bar fill, 0.0 to 1.0.
    pub progress: f64,
    pub knob_scale: f32,
    pub time_label: String,
    pub show_time_remaining: bool,
    pub is_full_screen: bool,
    /// The fullscreen button is hidden when the resize mode pins fullscreen.
    pub show_full_screen_button: bool,
    pub loading: bool,
    pub error_label: Option<String>,
    /// Controls accept input only while shown or fading in.
    pub interactive: bool,
    pub resize_mode: ResizeMode,
    /// Transient message shown above the controls, such as a settings warning.
    pub notice: Option<String>,
}

impl OverlayViewModel {
    #[must_use]
    pub fn build(
        state: &PlaybackState,
        frame: OverlayFrame,
        insets: SafeAreaInsets,
        interactive: bool,
    ) -> Self {
        let error_label = state.error.then(|| {
            state
                .last_error
                .as_ref()
                .map_or("Playback failed", |err| err.label())
                .to_string()
        });

        Self {
            frame,
            paddings: control_paddings(state.orientation, insets),
            orientation: state.orientation,
            is_playing: state.is_playing,
            progress: state.seeker_progress.value(),
            knob_scale: if state.is_seeking {
                KNOB_SCALE_ACTIVE
            } else {
                KNOB_SCALE_IDLE
            },
            time_label: calculate_time(
                state.current_time,
                state.duration,
                state.show_time_remaining,
            ),
            show_time_remaining: state.show_time_remaining,
            is_full_screen: state.is_full_screen,
            show_full_screen_button: !state.resize_mode.forces_full_screen(),
            loading: state.loading && !state.error,
            error_label,
            interactive,
            resize_mode: state.effective_resize_mode(),
            notice: None,
        }
    }
}
