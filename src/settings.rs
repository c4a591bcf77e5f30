//! Game settings and tuning
//!
//! Defaults come from `crate::consts`. A JSON file can override any subset of
//! the fields; missing keys fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{PlayField, SteeringParams};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Field dimensions, entity roster and steering tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_radius: f32,
    pub player_speed: f32,

    // === Targets ===
    pub target_radius: f32,
    pub target_count: u32,
    /// Flee tuning (negative weight = repulsion)
    pub flee: SteeringParams,

    // === Enemies ===
    pub enemy_radius: f32,
    pub enemy_speed: f32,
    pub enemy_count: u32,

    // === Simulation ===
    /// Steering vectors shorter than this are not normalized
    pub steer_epsilon: f32,
    /// Random samples per spawn before giving up
    pub max_placement_attempts: u32,
    /// Upper bound on a single frame's elapsed time
    pub max_frame_dt: f32,
    /// RNG seed for spawn placement
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,

            target_radius: TARGET_RADIUS,
            target_count: 1,
            flee: SteeringParams::default(),

            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_count: 1,

            steer_epsilon: STEER_EPSILON,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_frame_dt: MAX_FRAME_DT,
            seed: 0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_radius", self.player_radius),
            ("target_radius", self.target_radius),
            ("enemy_radius", self.enemy_radius),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("flee.max_speed", self.flee.max_speed),
            ("flee.threshold", self.flee.threshold),
            ("steer_epsilon", self.steer_epsilon),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if !self.flee.weight.is_finite() {
            return Err(SettingsError::Invalid("flee.weight must be finite".into()));
        }
        if self.max_placement_attempts == 0 {
            return Err(SettingsError::Invalid("max_placement_attempts must be at least 1".into()));
        }
        if !self.field().fits(self.player_radius) {
            return Err(SettingsError::Invalid(format!(
                "player radius {} does not fit in a {}x{} field",
                self.player_radius, self.field_width, self.field_height
            )));
        }

        Ok(())
    }

    pub fn field(&self) -> PlayField {
        PlayField::new(self.field_width, self.field_height)
    }
}
