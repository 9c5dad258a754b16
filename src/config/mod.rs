// SPDX-License-Identifier: MPL-2.0
//! This module handles the player configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[player]` - Media source, player size, looping and resize mode
//! - `[controls]` - Auto-hide delay, tap window and overlay animation
//! - `[video]` - Volume, mute and playback rate sent to the surface
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_PLAYBACK_OVERLAY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_playback_overlay::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.player.loop_enabled = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::ui::{AnimationDuration, ControlTimeout, TapWindow};
use crate::domain::video::{PlaybackRate, ResizeMode, Source, Volume};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the settings file cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Host-facing player settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerSection {
    /// Media path or URL played when no source is passed on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Player width in logical pixels.
    #[serde(default = "default_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Player height in logical pixels.
    #[serde(default = "default_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// Whether playback restarts when the media ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_enabled: Option<bool>,

    /// Whether the player starts in fullscreen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_full_screen: Option<bool>,

    /// Surface scaling policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_mode: Option<ResizeMode>,
}

impl Default for PlayerSection {
    fn default() -> Self {
        Self {
            source: None,
            width: default_width(),
            height: default_height(),
            loop_enabled: Some(false),
            is_full_screen: Some(false),
            resize_mode: Some(ResizeMode::default()),
        }
    }
}

/// Overlay timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsSection {
    /// Inactivity delay before the overlay hides (milliseconds).
    #[serde(
        default = "default_control_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub control_timeout_ms: Option<u64>,

    /// Window separating single and double taps (milliseconds).
    #[serde(
        default = "default_tap_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tap_window_ms: Option<u64>,

    /// Length of the show/hide transition (milliseconds).
    #[serde(
        default = "default_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_ms: Option<u64>,
}

impl Default for ControlsSection {
    fn default() -> Self {
        Self {
            control_timeout_ms: default_control_timeout_ms(),
            tap_window_ms: default_tap_window_ms(),
            animation_ms: default_animation_ms(),
        }
    }
}

/// Values forwarded to the video surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoSection {
    /// Playback volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,

    /// Whether audio is muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,

    /// Playback rate (1.0 = normal speed).
    #[serde(default = "default_rate", skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl Default for VideoSection {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            muted: Some(false),
            rate: default_rate(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Player configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerSection,

    #[serde(default)]
    pub controls: ControlsSection,

    #[serde(default)]
    pub video: VideoSection,
}

// =============================================================================
// Resolved Player Configuration
// =============================================================================

/// Fully resolved configuration handed to the player at mount.
///
/// Unlike [`Config`], every value here is validated and present.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub source: Source,
    pub width: f32,
    pub height: f32,
    pub loop_enabled: bool,
    pub is_full_screen: bool,
    pub resize_mode: ResizeMode,
    pub control_timeout: ControlTimeout,
    pub tap_window: TapWindow,
    pub animation: AnimationDuration,
    pub volume: Volume,
    pub muted: bool,
    pub rate: PlaybackRate,
}

impl PlayerConfig {
    /// Creates a configuration for `source` with every other value defaulted.
    #[must_use]
    pub fn new(source: Source) -> Self {
        Self {
            source,
            width: DEFAULT_PLAYER_WIDTH,
            height: DEFAULT_PLAYER_HEIGHT,
            loop_enabled: false,
            is_full_screen: false,
            resize_mode: ResizeMode::default(),
            control_timeout: ControlTimeout::default(),
            tap_window: TapWindow::default(),
            animation: AnimationDuration::default(),
            volume: Volume::default(),
            muted: false,
            rate: PlaybackRate::default(),
        }
    }

    /// Resolves a file configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when neither the file nor `source_override`
    /// names a media source.
    pub fn resolve(config: &Config, source_override: Option<Source>) -> Result<Self> {
        let source = source_override
            .or_else(|| config.player.source.clone().map(Source::new))
            .filter(|source| !source.is_empty())
            .ok_or_else(|| Error::Config("no media source configured".to_string()))?;

        let mut resolved = Self::new(source);
        let player = &config.player;
        if let Some(width) = player.width.filter(|w| w.is_finite() && *w > 0.0) {
            resolved.width = width;
        }
        if let Some(height) = player.height.filter(|h| h.is_finite() && *h > 0.0) {
            resolved.height = height;
        }
        resolved.loop_enabled = player.loop_enabled.unwrap_or(false);
        resolved.is_full_screen = player.is_full_screen.unwrap_or(false);
        resolved.resize_mode = player.resize_mode.unwrap_or_default();

        let controls = &config.controls;
        if let Some(ms) = controls.control_timeout_ms {
            resolved.control_timeout = ControlTimeout::new(ms);
        }
        if let Some(ms) = controls.tap_window_ms {
            resolved.tap_window = TapWindow::new(ms);
        }
        if let Some(ms) = controls.animation_ms {
            resolved.animation = AnimationDuration::new(ms);
        }

        let video = &config.video;
        if let Some(volume) = video.volume {
            resolved.volume = Volume::new(volume);
        }
        resolved.muted = video.muted.unwrap_or(false);
        if let Some(rate) = video.rate {
            resolved.rate = PlaybackRate::new(rate);
        }

        Ok(resolved)
    }

    /// Returns the fullscreen flag the player starts with.
    ///
    /// `Cover` always starts in fullscreen, whatever the flag says.
    #[must_use]
    pub fn initial_full_screen(&self) -> bool {
        self.is_full_screen || self.resize_mode.forces_full_screen()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_width() -> Option<f32> {
    Some(DEFAULT_PLAYER_WIDTH)
}

fn default_height() -> Option<f32> {
    Some(DEFAULT_PLAYER_HEIGHT)
}

fn default_control_timeout_ms() -> Option<u64> {
    Some(DEFAULT_CONTROL_TIMEOUT_MS)
}

fn default_tap_window_ms() -> Option<u64> {
    Some(DEFAULT_TAP_WINDOW_MS)
}

fn default_animation_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_MS)
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn default_rate() -> Option<f64> {
    Some(DEFAULT_RATE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => return (Config::default(), Some(LOAD_ERROR_WARNING.to_string())),
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Propagates I/O and serialization failures.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Propagates I/O and serialization failures.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Propagates I/O and serialization failures.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
