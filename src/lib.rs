//! Dot Chase - collision and steering core for tiny 2D dot games
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entity registry, collisions, steering, session state)
//! - `render`: Abstract draw calls (canvas trait, recorded draw lists, HUD layout)
//! - `platform`: Frame driver loop and headless host
//! - `settings`: Data-driven field and tuning configuration

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{GameState, SimError, SimResult};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults - spawns in the middle of the field
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const PLAYER_SPEED: f32 = 200.0;

    /// Target defaults - flees the player
    pub const TARGET_RADIUS: f32 = 10.0;
    /// Distance at which targets start fleeing
    pub const FLEE_THRESHOLD: f32 = 200.0;
    /// Negative weight = repulsion
    pub const FLEE_WEIGHT: f32 = -400.0;
    pub const FLEE_MAX_SPEED: f32 = 160.0;

    /// Enemy defaults - seeks the player
    pub const ENEMY_RADIUS: f32 = 12.0;
    pub const ENEMY_SPEED: f32 = 120.0;

    /// Smallest radius an entity can have
    pub const MIN_ENTITY_RADIUS: f32 = 1.0;

    /// Below this length a steering vector is not normalized
    pub const STEER_EPSILON: f32 = 0.01;

    /// Random sampling attempts before a spawn gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

    /// Longest frame the driver will feed into a single step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
