//! Camera Configuration
//!
//! Defines the camera's tunable parameters as a serializable structure so a
//! host application can persist and reload its view setup. JSON on disk,
//! with every field defaulting so partial files stay valid.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::free_look::{DegenerateBasisError, FreeLookCamera};

/// Errors from loading or saving a camera configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read or written
    Io(std::io::Error),
    /// File contents were not valid configuration JSON
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config file I/O error: {e}"),
            Self::Json(e) => write!(f, "config file parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Tunable camera parameters.
///
/// `CameraConfig::default()` matches the built-in demo setup: eye at head
/// height a few meters back from the origin, looking at the origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial eye position in world space
    pub position: Vec3,
    /// Initial look-at target
    pub target: Vec3,
    /// Up hint for the initial basis
    pub up: Vec3,
    /// Rotation sensitivity in degrees per raw pointer delta unit
    pub sensitivity: f32,
    /// Movement speed in meters per second
    pub move_speed: f32,
    /// Invert the vertical look axis (flight-sim style)
    pub invert_y: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.8, 5.0), // eye level, 5m back
            target: Vec3::ZERO,
            up: Vec3::Y,
            sensitivity: 0.1,
            move_speed: 5.0, // walking speed
            invert_y: false,
        }
    }
}

impl CameraConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Save the configuration to a JSON file (pretty-printed).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Build a camera from this configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`DegenerateBasisError`] when the configured position,
    /// target and up hint do not form a usable basis.
    pub fn build_camera(&self) -> Result<FreeLookCamera, DegenerateBasisError> {
        let mut camera = FreeLookCamera::new(self.position, self.target, self.up)?;
        camera.set_sensitivity(self.sensitivity);
        Ok(camera)
    }
}
