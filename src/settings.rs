//! Run settings
//!
//! Board geometry and presentation timing. Game rules (divisors, escalation
//! threshold, health deltas) are fixed in [`crate::consts`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors from loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings file is not valid JSON for [`Settings`]
    Parse(serde_json::Error),
    /// A value is out of range
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "malformed settings: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    /// Columns in the tile grid
    pub grid_width: u32,
    /// Rows in the tile grid
    pub grid_height: u32,
    /// Run seed (None = derive from the clock)
    pub seed: Option<u64>,

    // === Presentation timing ===
    /// Animation ticks a consumed tile spends flying to its drop zone
    pub transit_ticks: u32,
    /// Chebyshev radius of the hover shake neighbourhood
    pub hover_radius: u32,

    // === Autoplay demo ===
    /// Selections the native demo performs before stopping
    pub demo_selections: u32,
    /// Chance (0.0 - 1.0) that the autoplayer makes a deliberately bad pick
    pub blunder_chance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 12,
            seed: None,

            transit_ticks: 20,
            hover_radius: 3,

            demo_selections: 200,
            blunder_chance: 0.1,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(SettingsError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.grid_width.checked_mul(self.grid_height).is_none() {
            return Err(SettingsError::Invalid(format!(
                "grid of {}x{} cells is too large",
                self.grid_width, self.grid_height
            )));
        }
        if !(0.0..=1.0).contains(&self.blunder_chance) {
            return Err(SettingsError::Invalid(format!(
                "blunder_chance must be within 0.0..=1.0, got {}",
                self.blunder_chance
            )));
        }
        Ok(())
    }
}
