// SPDX-License-Identifier: MPL-2.0
//! Demo application: the overlay on top of a simulated video surface.
//!
//! `App` owns the [`OverlayPlayer`], the orientation provider fed by window
//! size, and the window id needed for fullscreen changes. It translates
//! overlay effects into window tasks and drives the frame clock. Settings
//! warnings and export results are shown as overlay notices.

mod message;
pub mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, PlayerConfig};
use crate::diagnostics::export;
use crate::domain::video::Source;
use crate::layout::FixedInsets;
use crate::orientation::ManualOrientation;
use crate::player::{self, OverlayPlayer};
use crate::surface::SimulatedSurface;
use crate::ui::design_tokens::palette;
use crate::ui::overlay;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Container, Stack, Text};
use iced::{window, Background, Element, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;

/// Source played when neither the CLI nor the settings file names one.
pub const DEMO_SOURCE: &str = "simulated://demo";

/// Minimum window dimensions.
const MIN_WINDOW_WIDTH: f32 = 320.0;
const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Root application state.
pub struct App {
    player: OverlayPlayer<SimulatedSurface>,
    orientation: ManualOrientation,
    window_id: Option<window::Id>,
    started_at: Instant,
    export_dir: PathBuf,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("source", &self.player.config().source)
            .field("window_id", &self.window_id)
            .finish_non_exhaustive()
    }
}

/// Merges the settings file with CLI flags.
///
/// Returns the resolved configuration and the warnings produced on the way.
#[must_use]
pub fn resolve_player_config(flags: &Flags) -> (PlayerConfig, Vec<String>) {
    let mut warnings = Vec::new();

    let file_config = if let Some(path) = &flags.config_path {
        config::load_from_path(path).unwrap_or_else(|err| {
            warnings.push(format!("{}: {err}", config::LOAD_ERROR_WARNING));
            config::Config::default()
        })
    } else {
        let (loaded, warning) = config::load();
        warnings.extend(warning);
        loaded
    };

    let source = flags.source.clone().map(Source::new);
    let mut player_config = PlayerConfig::resolve(&file_config, source).unwrap_or_else(|err| {
        warnings.push(format!("{err}; playing {DEMO_SOURCE}"));
        PlayerConfig::resolve(&file_config, Some(Source::new(DEMO_SOURCE)))
            .unwrap_or_else(|_| PlayerConfig::new(Source::new(DEMO_SOURCE)))
    });

    if flags.loop_enabled {
        player_config.loop_enabled = true;
    }
    if flags.full_screen {
        player_config.is_full_screen = true;
    }
    if let Some(mode) = flags.resize_mode {
        player_config.resize_mode = mode;
    }

    (player_config, warnings)
}

/// Builds the window settings for the configured player size.
#[must_use]
pub fn window_settings(config: &PlayerConfig) -> window::Settings {
    window::Settings {
        size: Size::new(
            config.width.max(MIN_WINDOW_WIDTH),
            config.height.max(MIN_WINDOW_HEIGHT),
        ),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (player_config, warnings) = resolve_player_config(&flags);
    let settings = window_settings(&player_config);

    // iced 0.14 requires a `Fn` boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some((flags, player_config, warnings)));
    let boot = move || {
        let (flags, player_config, warnings) = boot_state.borrow_mut().take().unwrap_or_else(|| {
            let flags = Flags::default();
            let (config, warnings) = resolve_player_config(&flags);
            (flags, config, warnings)
        });
        App::new(&flags, player_config, &warnings)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: &Flags, config: PlayerConfig, warnings: &[String]) -> (Self, Task<Message>) {
        let now = Instant::now();
        let mut orientation =
            ManualOrientation::new(ManualOrientation::from_size(config.width, config.height));
        let surface = flags
            .duration_secs
            .map_or_else(SimulatedSurface::default, SimulatedSurface::new);

        let mut player = OverlayPlayer::new(config);
        player.mount(&mut orientation, &FixedInsets::default());
        player.attach_surface(surface, now);
        for warning in warnings {
            player.warn(warning.clone(), now);
        }

        (
            Self {
                player,
                orientation,
                window_id: None,
                started_at: now,
                export_dir: export::default_export_directory(),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        format!(
            "{} - Iced Playback Overlay",
            self.player.config().source.as_str()
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Player(message) => {
                let effect = self.player.update(message, Instant::now());
                self.handle_effect(effect)
            }
            Message::Tick(now) => self.advance(now),
            Message::WindowOpened { id, size } => {
                self.window_id = Some(id);
                self.set_window_size(size, Instant::now());
                if self.player.state().is_full_screen {
                    window::set_mode(id, window::Mode::Fullscreen)
                } else {
                    Task::none()
                }
            }
            Message::WindowResized { id, size } => {
                self.window_id.get_or_insert(id);
                self.set_window_size(size, Instant::now());
                Task::none()
            }
            Message::ExportDiagnostics => {
                self.export_diagnostics(Instant::now());
                Task::none()
            }
        }
    }

    /// Derives the orientation from the window size and applies it right away.
    fn set_window_size(&mut self, size: Size, now: Instant) {
        self.orientation
            .set(ManualOrientation::from_size(size.width, size.height));
        self.player.tick(now);
    }

    /// Writes the activity log and reports the outcome as a notice.
    fn export_diagnostics(&mut self, now: Instant) {
        self.player.tick(now);
        match export::export_to_dir(self.player.diagnostics(), &self.export_dir) {
            Ok(path) => self
                .player
                .show_notice(format!("Diagnostics saved to {}", path.display()), now),
            Err(err) => self
                .player
                .warn(format!("diagnostics-export-failed: {err}"), now),
        }
    }

    /// Moves the simulated surface and the overlay timers to `now`.
    fn advance(&mut self, now: Instant) -> Task<Message> {
        let events = self
            .player
            .surface_mut()
            .map(|surface| surface.advance(now))
            .unwrap_or_default();

        let tasks: Vec<Task<Message>> = events
            .into_iter()
            .map(|event| {
                let effect = self
                    .player
                    .update(player::Message::Surface(event), now);
                self.handle_effect(effect)
            })
            .collect();

        self.player.tick(now);
        Task::batch(tasks)
    }

    fn handle_effect(&mut self, effect: player::Effect) -> Task<Message> {
        match effect {
            player::Effect::None => Task::none(),
            player::Effect::Back => {
                self.player.unmount(&mut self.orientation);
                match self.window_id {
                    Some(id) => window::close(id),
                    None => iced::exit(),
                }
            }
            player::Effect::FullScreenChanged(full_screen) => {
                let Some(id) = self.window_id else {
                    return Task::none();
                };
                let mode = if full_screen {
                    window::Mode::Fullscreen
                } else {
                    window::Mode::Windowed
                };
                window::set_mode(id, mode)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        let model = self.player.view_model(now);

        let position = self
            .player
            .surface()
            .map_or(0.0, SimulatedSurface::position);
        let picture = Container::new(
            Text::new(format!(
                "{}  {:.1}s  [{}]",
                self.player.config().source,
                position,
                model.resize_mode
            ))
            .color(palette::PLACEHOLDER_TEXT),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(palette::SCRIM)),
            ..Default::default()
        });

        let controls = overlay::view(&model, now.saturating_duration_since(self.started_at))
            .map(Message::Player);

        Stack::new()
            .push(picture)
            .push(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let surface_active = self
            .player
            .surface()
            .is_some_and(SimulatedSurface::is_active);
        let state = self.player.state();
        let active = surface_active
            || (state.loading && !state.error)
            || self.player.needs_ticks(Instant::now());

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(active),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticEventKind;
    use crate::domain::video::{Orientation, ResizeMode};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn app(warnings: &[String]) -> App {
        let config = PlayerConfig::new(Source::new("clip.mp4"));
        App::new(&Flags::default(), config, warnings).0
    }

    #[test]
    fn cli_source_wins_over_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "[player]\nsource = \"file.mp4\"").expect("write config");

        let flags = Flags {
            source: Some("cli.mp4".into()),
            config_path: Some(file.path().to_path_buf()),
            ..Flags::default()
        };
        let (config, warnings) = resolve_player_config(&flags);
        assert_eq!(config.source, Source::new("cli.mp4"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_source_falls_back_to_demo() {
        let file = NamedTempFile::new().expect("temp file");
        let flags = Flags {
            config_path: Some(file.path().to_path_buf()),
            ..Flags::default()
        };
        let (config, warnings) = resolve_player_config(&flags);
        assert_eq!(config.source, Source::new(DEMO_SOURCE));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn invalid_file_is_reported_and_ignored() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "not = [valid").expect("write config");
        let flags = Flags {
            source: Some("clip.mp4".into()),
            config_path: Some(file.path().to_path_buf()),
            ..Flags::default()
        };
        let (config, warnings) = resolve_player_config(&flags);
        assert_eq!(config.source, Source::new("clip.mp4"));
        assert!(warnings[0].starts_with(config::LOAD_ERROR_WARNING));
    }

    #[test]
    fn flags_override_file_settings() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "[player]\nsource = \"a.mp4\"\nresize_mode = \"stretch\"")
            .expect("write config");
        let flags = Flags {
            loop_enabled: true,
            full_screen: true,
            resize_mode: Some(ResizeMode::Cover),
            config_path: Some(file.path().to_path_buf()),
            ..Flags::default()
        };
        let (config, _) = resolve_player_config(&flags);
        assert!(config.loop_enabled);
        assert!(config.is_full_screen);
        assert_eq!(config.resize_mode, ResizeMode::Cover);
    }

    #[test]
    fn startup_warnings_are_shown_and_logged() {
        let app = app(&["config-load-error: bad toml".to_string()]);

        let model = app.player.view_model(Instant::now());
        assert_eq!(model.notice.as_deref(), Some("config-load-error: bad toml"));
        assert!(app.player.diagnostics().iter().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::Warning { message } if message.starts_with("config-load-error")
        )));
    }

    #[test]
    fn resize_applies_orientation_without_waiting_for_a_tick() {
        let mut app = app(&[]);
        assert_eq!(app.player.state().orientation, Orientation::Landscape);

        app.set_window_size(Size::new(400.0, 800.0), Instant::now());
        assert_eq!(app.player.state().orientation, Orientation::Portrait);
    }

    #[test]
    fn export_writes_report_and_shows_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = app(&["config-load-error: bad toml".to_string()]);
        app.export_dir = dir.path().to_path_buf();

        app.export_diagnostics(Instant::now());

        let written: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read export dir")
            .filter_map(Result::ok)
            .collect();
        assert_eq!(written.len(), 1);
        let content = std::fs::read_to_string(written[0].path()).expect("read report");
        assert!(content.contains("config-load-error"));

        let notice = app.player.view_model(Instant::now()).notice;
        assert!(notice.is_some_and(|text| text.starts_with("Diagnostics saved to")));
    }

    #[test]
    fn failed_export_is_shown_as_warning() {
        let file = NamedTempFile::new().expect("temp file");
        let mut app = app(&[]);
        app.export_dir = file.path().to_path_buf();

        app.export_diagnostics(Instant::now());

        let notice = app.player.view_model(Instant::now()).notice;
        assert!(notice.is_some_and(|text| text.starts_with("diagnostics-export-failed")));
    }

    #[test]
    fn window_respects_minimum_size() {
        let mut config = PlayerConfig::new(Source::new("clip.mp4"));
        config.width = 100.0;
        config.height = 100.0;
        let settings = window_settings(&config);
        assert_eq!(settings.size, Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }
}
