// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Surface(SurfaceError),
    /// The diagnostics report could not be serialized.
    Export(String),
}

/// Failures reported by the video surface.
///
/// Both variants go through the same playback transition: they set the
/// error flag and end the current load attempt. Recovery needs a new source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The surface could not start playing the source.
    Load(String),

    /// The surface failed after playback had started.
    Playback(String),
}

impl SurfaceError {
    /// Returns the raw message carried by the error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            SurfaceError::Load(msg) | SurfaceError::Playback(msg) => msg,
        }
    }

    /// Returns a short label suitable for the overlay error indicator.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceError::Load(_) => "Unable to load video",
            SurfaceError::Playback(_) => "Playback failed",
        }
    }
}

/// Malformed pointer sequences on the seek bar.
///
/// These come from legitimate overlapping input, so they are never raised:
/// the seek controller ignores the event and the orchestrator records a
/// diagnostics warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureInputError {
    /// A grant arrived while a gesture was already live.
    AlreadyActive,

    /// A move, release or terminate arrived without a matching grant.
    NoActiveGesture,

    /// The seek track has not been measured yet (width is zero).
    UnmeasuredTrack,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Load(msg) => write!(f, "Load failed: {}", msg),
            SurfaceError::Playback(msg) => write!(f, "Playback failed: {}", msg),
        }
    }
}

impl fmt::Display for GestureInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureInputError::AlreadyActive => write!(f, "seek gesture already active"),
            GestureInputError::NoActiveGesture => write!(f, "no active seek gesture"),
            GestureInputError::UnmeasuredTrack => write!(f, "seek track width is unknown"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Surface(e) => write!(f, "Surface Error: {}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Error::Surface(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_settings_file_becomes_io_error() {
        let err: Error = std::io::Error::other("permission denied").into();
        assert!(matches!(err, Error::Io(ref message) if message.contains("permission denied")));
        assert_eq!(format!("{}", err), "I/O Error: permission denied");
    }

    #[test]
    fn malformed_toml_becomes_config_error() {
        let parse_error = toml::from_str::<toml::Table>("source = ").unwrap_err();
        let err: Error = parse_error.into();
        assert!(format!("{}", err).starts_with("Config Error: "));
    }

    #[test]
    fn surface_error_converts_into_crate_error() {
        let err: Error = SurfaceError::Load("404".into()).into();
        assert!(matches!(err, Error::Surface(SurfaceError::Load(ref m)) if m == "404"));
        assert_eq!(format!("{}", err), "Surface Error: Load failed: 404");
    }

    #[test]
    fn surface_error_exposes_message_and_label() {
        let err = SurfaceError::Playback("decoder stalled".into());
        assert_eq!(err.message(), "decoder stalled");
        assert_eq!(err.label(), "Playback failed");
        assert_eq!(SurfaceError::Load(String::new()).label(), "Unable to load video");
    }

    #[test]
    fn gesture_errors_display() {
        assert!(format!("{}", GestureInputError::NoActiveGesture).contains("no active"));
        assert!(format!("{}", GestureInputError::UnmeasuredTrack).contains("width"));
    }
}
