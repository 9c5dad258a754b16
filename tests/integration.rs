// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced_playback_overlay::config::{self, Config, PlayerConfig};
use iced_playback_overlay::diagnostics::DiagnosticEventKind;
use iced_playback_overlay::domain::video::{ResizeMode, Source};
use iced_playback_overlay::player::{Effect, Message, OverlayPlayer, SeekPointer};
use iced_playback_overlay::playback::{calculate_time, format_time};
use iced_playback_overlay::surface::{RecordingSurface, SimulatedSurface, SurfaceEvent};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn config() -> PlayerConfig {
    PlayerConfig::new(Source::new("clip.mp4"))
}

/// Player with a recording surface that has loaded 120 s of media at `t0`.
fn loaded(config: PlayerConfig, t0: Instant) -> OverlayPlayer<RecordingSurface> {
    let mut player = OverlayPlayer::new(config);
    player.attach_surface(RecordingSurface::new(), t0);
    player.update(Message::Surface(SurfaceEvent::LoadStart), t0);
    player.update(Message::Surface(SurfaceEvent::Load { duration: 120.0 }), t0);
    if let Some(surface) = player.surface_mut() {
        surface.clear();
    }
    player
}

fn seeks(player: &OverlayPlayer<RecordingSurface>) -> Vec<f64> {
    player.surface().map(RecordingSurface::seeks).unwrap_or_default()
}

// =============================================================================
// Time label
// =============================================================================

#[test]
fn time_label_matches_elapsed_and_remaining_formats() {
    let duration = 100.0;
    for current in [0.0, 0.4, 12.0, 59.5, 61.0, 99.9, 100.0] {
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
fn time_label_clamps_out_of_range_values() {
    assert_eq!(format_time(-5.0, 100.0), "0:00");
    assert_eq!(format_time(150.0, 100.0), "1:40");
}

// =============================================================================
// Auto-hide
// =============================================================================

#[test]
fn two_quick_interactions_leave_one_full_delay_from_the_second() {
    let t0 = Instant::now();
    let mut player = loaded(config(), t0);

    player.update(Message::ToggleTimeDisplay, t0 + ms(1000));
    player.update(Message::ToggleTimeDisplay, t0 + ms(1001));
    assert_eq!(player.next_deadline(), Some(t0 + ms(1001) + ms(5000)));

    player.tick(t0 + ms(6000));
    assert!(player.state().is_controls_visible);
    player.tick(t0 + ms(6001));
    assert!(!player.state().is_controls_visible);
    assert_eq!(player.next_deadline(), None);
}

// =============================================================================
// Seek gesture
// =============================================================================

#[test]
fn progress_during_seek_moves_time_but_not_the_bar() {
    let t0 = Instant::now();
    let mut player = loaded(config(), t0);

    player.update(
        Message::SeekPointer(SeekPointer::Pressed { x: 0.0, width: 100.0 }),
        t0,
    );
    player.update(
        Message::SeekPointer(SeekPointer::Moved { x: 25.0, width: 100.0 }),
        t0,
    );
    let bar = player.state().seeker_progress;

    player.update(
        Message::Surface(SurfaceEvent::Progress { current_time: 90.0 }),
        t0 + ms(10),
    );
    assert_eq!(player.state().seeker_progress, bar);
    assert_abs_diff_eq!(player.state().current_time, 90.0);
}

#[test]
fn gesture_round_trip_restores_play_intent() {
    for was_playing in [true, false] {
        let t0 = Instant::now();
        let mut player = loaded(config(), t0);
        player.update(
            Message::Surface(SurfaceEvent::Progress { current_time: 24.0 }),
            t0,
        );
        assert_abs_diff_eq!(player.state().seeker_progress.value(), 0.2);
        if !was_playing {
            player.update(Message::TogglePlayPause, t0);
        }
        assert_eq!(player.state().is_playing, was_playing);

        player.update(
            Message::SeekPointer(SeekPointer::Pressed { x: 50.0, width: 200.0 }),
            t0,
        );
        assert!(player.state().is_seeking);
        assert!(!player.state().is_playing);

        player.update(
            Message::SeekPointer(SeekPointer::Moved { x: 130.0, width: 200.0 }),
            t0 + ms(16),
        );
        assert_abs_diff_eq!(player.state().seeker_progress.value(), 0.6, epsilon = 1e-9);
        let commanded = seeks(&player);
        assert_abs_diff_eq!(commanded[commanded.len() - 1], 72.0, epsilon = 1e-9);

        player.update(Message::SeekPointer(SeekPointer::Released), t0 + ms(32));
        assert!(!player.state().is_seeking);
        assert_eq!(player.state().is_playing, was_playing);
    }
}

#[test]
fn pointer_leaving_ends_the_gesture_like_release() {
    let t0 = Instant::now();
    let mut player = loaded(config(), t0);

    player.update(
        Message::SeekPointer(SeekPointer::Pressed { x: 0.0, width: 100.0 }),
        t0,
    );
    player.update(Message::SeekPointer(SeekPointer::Left), t0);
    assert!(!player.state().is_seeking);
    assert!(player.state().is_playing);
    assert!(player.gesture().is_none());
}

#[test]
fn second_grant_is_ignored_and_logged() {
    let t0 = Instant::now();
    let mut player = loaded(config(), t0);

    let pressed = Message::SeekPointer(SeekPointer::Pressed { x: 0.0, width: 100.0 });
    player.update(pressed.clone(), t0);
    player.update(pressed, t0);

    assert!(matches!(
        player.diagnostics().latest().map(|event| &event.kind),
        Some(DiagnosticEventKind::Warning { .. })
    ));
    assert!(player.state().is_seeking);
}

// =============================================================================
// Taps
// =============================================================================

#[test]
fn double_tap_toggles_full_screen_once_and_leaves_visibility() {
    let t0 = Instant::now();
    let mut player = loaded(config(), t0);

    assert_eq!(player.update(Message::Tap, t0 + ms(100)), Effect::None);
    assert_eq!(
        player.update(Message::Tap, t0 + ms(399)),
        Effect::FullScreenChanged(true)
    );

    player.tick(t0 + ms(2000));
    assert!(player.state().is_full_screen);
    assert!(player.state().is_controls_visible);
}

#[test]
fn slow_taps_toggle_visibility_twice_and_never_full_screen() {
    let t0 = Instant::now();
    let mut player = loaded(config(), t0);

    player.update(Message::Tap, t0 + ms(100));
    assert_eq!(player.update(Message::Tap, t0 + ms(400)), Effect::None);
    assert!(!player.state().is_controls_visible);

    player.tick(t0 + ms(700));
    assert!(player.state().is_controls_visible);
    assert!(!player.state().is_full_screen);
}

// =============================================================================
// End of media
// =============================================================================

#[test]
fn end_without_loop_rewinds_pauses_and_hides() {
    let t0 = Instant::now();
    let mut player = loaded(config(), t0);

    player.update(Message::Surface(SurfaceEvent::End), t0 + ms(100));

    let state = player.state();
    assert!(!state.is_playing);
    assert_abs_diff_eq!(state.seeker_progress.value(), 0.0);
    assert_abs_diff_eq!(state.current_time, 120.0);
    assert!(!state.is_controls_visible);
    assert_eq!(seeks(&player), vec![0.0]);
    assert_eq!(player.next_deadline(), None);
}

#[test]
fn end_with_loop_parks_bar_at_end_and_keeps_playing() {
    let t0 = Instant::now();
    let mut looping = config();
    looping.loop_enabled = true;
    let mut player = loaded(looping, t0);

    player.update(Message::Surface(SurfaceEvent::End), t0);

    let state = player.state();
    assert!(state.is_playing);
    assert_abs_diff_eq!(state.seeker_progress.value(), 1.0);
    assert_abs_diff_eq!(state.current_time, 120.0);
    assert_eq!(seeks(&player), vec![0.0]);
}

#[test]
fn play_after_end_rewinds_first() {
    let t0 = Instant::now();
    let mut looping = config();
    looping.loop_enabled = true;
    let mut player = loaded(looping, t0);

    player.update(Message::Surface(SurfaceEvent::End), t0);
    player.update(Message::TogglePlayPause, t0);
    assert_abs_diff_eq!(player.state().seeker_progress.value(), 0.0);
    assert_eq!(seeks(&player), vec![0.0, 0.0]);
}

// =============================================================================
// Resize mode
// =============================================================================

#[test]
fn cover_forces_full_screen_at_mount() {
    let mut cover = config();
    cover.resize_mode = ResizeMode::Cover;
    cover.is_full_screen = false;

    let player: OverlayPlayer<RecordingSurface> = OverlayPlayer::new(cover);
    assert!(player.state().is_full_screen);
    assert!(!player.view_model(Instant::now()).show_full_screen_button);
}

// =============================================================================
// Simulated surface end to end
// =============================================================================

#[test]
fn simulated_playback_runs_to_the_end() {
    let t0 = Instant::now();
    let surface = SimulatedSurface::new(2.0).with_load_latency(ms(100));
    let mut player = OverlayPlayer::new(config());
    player.attach_surface(surface, t0);

    let mut now = t0;
    for _ in 0..200 {
        now += ms(16);
        let events = player
            .surface_mut()
            .map(|surface| surface.advance(now))
            .unwrap_or_default();
        for event in events {
            player.update(Message::Surface(event), now);
        }
        player.tick(now);
    }

    let state = player.state();
    assert!(!state.loading);
    assert!(!state.is_playing);
    assert_abs_diff_eq!(state.duration, 2.0);
    assert_eq!(player.surface().map(SimulatedSurface::is_paused), Some(true));
}

#[test]
fn failing_source_shows_error_until_a_new_source_loads() {
    let t0 = Instant::now();
    let mut player = OverlayPlayer::new(PlayerConfig::new(Source::new("error:404")));
    player.attach_surface(SimulatedSurface::new(5.0).with_load_latency(ms(50)), t0);

    let mut now = t0;
    for _ in 0..10 {
        now += ms(16);
        let events = player
            .surface_mut()
            .map(|surface| surface.advance(now))
            .unwrap_or_default();
        for event in events {
            player.update(Message::Surface(event), now);
        }
    }
    assert!(player.state().error);
    assert!(player.view_model(now).error_label.is_some());

    player.update(Message::SetSource(Source::new("clip.mp4")), now);
    assert!(!player.state().error);
    assert!(player.state().loading);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn saved_config_resolves_to_player_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut file_config = Config::default();
    file_config.player.source = Some("saved.mp4".to_string());
    file_config.player.resize_mode = Some(ResizeMode::Stretch);
    file_config.controls.control_timeout_ms = Some(2000);
    config::save_to_path(&file_config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let resolved = PlayerConfig::resolve(&loaded, None).expect("source is configured");
    assert_eq!(resolved.source, Source::new("saved.mp4"));
    assert_eq!(resolved.resize_mode, ResizeMode::Stretch);
    assert_eq!(resolved.control_timeout.value(), 2000);
}
