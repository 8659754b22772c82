//! Game settings and preferences
//!
//! Stored as JSON next to the executable (or wherever the first CLI argument
//! points). A missing or broken file never stops the game: it is logged and
//! the defaults are used.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY_STEP, INITIAL_GRAVITY, MAX_SUBSTEPS};

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "bullet_bill.json";

/// How the scene is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayMode {
    /// Flat coloured rectangles and circles
    Shapes,
    /// Textured sprites with animation and the aim guide
    #[default]
    Sprites,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Shapes => "Shapes",
            DisplayMode::Sprites => "Sprites",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shapes" | "simple" => Some(DisplayMode::Shapes),
            "sprites" | "graphics" => Some(DisplayMode::Sprites),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Shapes => DisplayMode::Sprites,
            DisplayMode::Sprites => DisplayMode::Shapes,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Starting display mode
    pub display_mode: DisplayMode,

    // === Physics ===
    /// Gravity at start (px/tick²)
    pub initial_gravity: f32,
    /// Change per gravity key press
    pub gravity_step: f32,

    // === Frame pump ===
    /// Most fixed steps run for a single rendered frame
    pub max_substeps: u32,

    // === Assets ===
    /// Directory containing `FONTS/` and `IMAGES/`
    pub asset_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Sprites,
            initial_gravity: INITIAL_GRAVITY,
            gravity_step: GRAVITY_STEP,
            max_substeps: MAX_SUBSTEPS,
            asset_root: PathBuf::from("ASSETS"),
        }
    }
}

/// Why a settings file could not be used
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read settings: {e}"),
            Self::Parse(e) => write!(f, "invalid settings JSON: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl Settings {
    /// Parse settings from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a file
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Write settings to a file
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Keep values the simulation can live with
    fn sanitize(&mut self) {
        if !self.initial_gravity.is_finite() || self.initial_gravity < 0.0 {
            log::warn!("initial_gravity {} out of range, using 0", self.initial_gravity);
            self.initial_gravity = 0.0;
        }
        if !self.gravity_step.is_finite() {
            self.gravity_step = GRAVITY_STEP;
        }
        self.gravity_step = self.gravity_step.abs();
        self.max_substeps = self.max_substeps.max(1);
    }
}
