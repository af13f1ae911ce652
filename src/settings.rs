//! Game settings
//!
//! Arena dimensions and simulation tunables, loaded from a JSON document.
//! Missing fields fall back to the compile-time defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BALL_RADIUS, FRAME_SIZE, PADDLE_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, SIM_DT, START_LIVES,
};

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file - {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings document - {0}")]
    Json(#[from] serde_json::Error),
}

/// Arena and simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen width in pixels
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,
    /// Thickness of the walls and HUD panel
    pub frame_size: u32,
    pub ball_radius: u32,
    pub paddle_height: u32,
    /// Lives at the start of a run
    pub start_lives: u32,
    /// Seconds per simulation step
    pub sim_dt: f64,
    /// Headless runs stop after this many frames
    pub max_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            frame_size: FRAME_SIZE,
            ball_radius: BALL_RADIUS,
            paddle_height: PADDLE_HEIGHT,
            start_lives: START_LIVES,
            sim_dt: SIM_DT,
            // Five minutes of play
            max_frames: 5 * 60 * 60,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
