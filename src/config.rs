//! Runtime configuration
//!
//! Stored as JSON: in LocalStorage on the web, in a file for the native
//! runner. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width (pixels)
    pub width: f32,
    /// Playfield height (pixels)
    pub height: f32,
    /// Fixed RNG seed; the host picks one from the clock when unset
    pub seed: Option<u64>,
    /// Longest frame delta fed to the simulation
    pub max_frame_delta_ms: f64,
    /// Vertical touch travel before a swipe registers
    pub swipe_threshold: f32,
    /// Draw the FPS counter
    pub show_fps: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            seed: None,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
            swipe_threshold: SWIPE_THRESHOLD,
            show_fps: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the playfield can hold the sprites, stays covered by the
    /// scrolling backdrop, and the limits are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The backdrop pair reaches x + 2 * width - speed with x down to -width
        let max_width = BACKGROUND_WIDTH - BACKGROUND_SPEED;
        if !(self.width.is_finite() && (PLAYER_WIDTH..=max_width).contains(&self.width)) {
            return Err(ConfigError::Invalid(format!(
                "width {} must be between {} and {}",
                self.width, PLAYER_WIDTH, max_width
            )));
        }
        let min_height = PLAYER_HEIGHT.max(ENEMY_HEIGHT);
        if !(self.height.is_finite() && (min_height..=BACKGROUND_HEIGHT).contains(&self.height)) {
            return Err(ConfigError::Invalid(format!(
                "height {} must be between {} and {}",
                self.height, min_height, BACKGROUND_HEIGHT
            )));
        }
        if !(self.max_frame_delta_ms.is_finite() && self.max_frame_delta_ms > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_frame_delta_ms {} must be positive",
                self.max_frame_delta_ms
            )));
        }
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "swipe_threshold {} must be positive",
                self.swipe_threshold
            )));
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "shadow_runner_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
