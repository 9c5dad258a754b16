// SPDX-License-Identifier: MPL-2.0
//! Video surface enums and the media source reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scaling policy applied by the video surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeMode {
    /// Letterbox the video inside the player bounds.
    #[default]
    Contain,
    /// Fill the bounds, cropping overflow. Forces fullscreen.
    Cover,
    /// Fill the bounds, ignoring the aspect ratio.
    Stretch,
    /// Render at native size.
    None,
}

impl ResizeMode {
    /// Returns true if this mode keeps the player in fullscreen.
    #[must_use]
    pub fn forces_full_screen(self) -> bool {
        matches!(self, Self::Cover)
    }

    /// Returns the kebab-case name used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::Stretch => "stretch",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contain" => Ok(Self::Contain),
            "cover" => Ok(Self::Cover),
            "stretch" => Ok(Self::Stretch),
            "none" => Ok(Self::None),
            other => Err(format!("invalid resize mode: {}", other)),
        }
    }
}

/// Device orientation as reported by the orientation provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    #[must_use]
    pub fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait)
    }
}

/// Opaque reference to the media the surface should play (path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Source(String);

impl Source {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the source holds no location at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
