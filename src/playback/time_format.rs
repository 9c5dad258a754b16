// SPDX-License-Identifier: MPL-2.0
//! Time label formatting for the overlay.
//!
//! Seconds are rounded up, so a position of 59.2 s reads `1:00` and the
//! label never shows a value below the actual playhead.

/// Formats `value` seconds as `M:SS`, clamped to `[0, duration]`.
///
/// Minutes are not padded and may exceed 59. A non-finite or negative
/// duration is treated as zero.
///
/// # Example
///
/// ```
/// use iced_playback_overlay::playback::time_format::format_time;
///
/// assert_eq!(format_time(75.0, 120.0), "1:15");
/// assert_eq!(format_time(-5.0, 100.0), "0:00");
/// assert_eq!(format_time(150.0, 100.0), "1:40");
/// ```
#[must_use]
pub fn format_time(value: f64, duration: f64) -> String {
    let upper = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, upper) };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_secs = clamped.ceil() as u64;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Builds the time label: remaining time with a leading `-`, or elapsed time.
#[must_use]
pub fn calculate_time(current_time: f64, duration: f64, show_time_remaining: bool) -> String {
    if show_time_remaining {
        format!("-{}", format_time(duration - current_time, duration))
    } else {
        format_time(current_time, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_unpadded_and_seconds_padded() {
        assert_eq!(format_time(0.0, 600.0), "0:00");
        assert_eq!(format_time(9.0, 600.0), "0:09");
        assert_eq!(format_time(61.0, 600.0), "1:01");
        assert_eq!(format_time(599.0, 600.0), "9:59");
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        assert_eq!(format_time(-5.0, 100.0), "0:00");
    }

    #[test]
    fn input_past_duration_clamps_to_duration() {
        assert_eq!(format_time(150.0, 100.0), "1:40");
    }

    #[test]
    fn seconds_round_up() {
        assert_eq!(format_time(0.2, 100.0), "0:01");
        assert_eq!(format_time(59.5, 100.0), "1:00");
        assert_eq!(format_time(60.0, 100.0), "1:00");
    }

    #[test]
    fn long_media_keeps_counting_minutes() {
        assert_eq!(format_time(3725.0, 7200.0), "62:05");
    }

    #[test]
    fn unknown_duration_reads_zero() {
        assert_eq!(format_time(12.0, 0.0), "0:00");
        assert_eq!(format_time(12.0, f64::NAN), "0:00");
        assert_eq!(format_time(f64::NAN, 100.0), "0:00");
    }

    #[test]
    fn remaining_label_is_prefixed_difference() {
        let duration = 120.0;
        for current in [0.0, 0.5, 30.0, 59.9, 119.0, 120.0] {
            assert_eq!(
                calculate_time(current, duration, true),
                format!("-{}", format_time(duration - current, duration))
            );
            assert_eq!(
                calculate_time(current, duration, false),
                format_time(current, duration)
            );
        }
    }

    #[test]
    fn remaining_label_examples() {
        assert_eq!(calculate_time(30.0, 120.0, true), "-1:30");
        assert_eq!(calculate_time(120.0, 120.0, true), "-0:00");
        assert_eq!(calculate_time(30.0, 120.0, false), "0:30");
    }
}
