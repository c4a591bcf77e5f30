//! Circular entities and their roles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_ENTITY_RADIUS;

/// Handle into the registry's entity storage
///
/// Valid for the lifetime of one session. A reset rebuilds the registry and
/// reissues handles from zero, so an old handle may name a different entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Behavioral category: decides both the steering rule and the collision policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Moved by directional input
    Player,
    /// Flees the player, respawns when caught
    Target,
    /// Seeks the player, ends the run on contact
    Enemy,
    /// Static obstacle
    Generic,
}

/// A circular game object
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    pub pos: Vec2,
    radius: f32,
    pub role: Role,
    /// Units per second (player/enemy); unused by targets, which flee by
    /// their steering params
    pub speed: f32,
}

impl Entity {
    /// Radii that are not finite or below `MIN_ENTITY_RADIUS` are raised to it
    pub fn new(role: Role, pos: Vec2, radius: f32, speed: f32) -> Self {
        let radius = if radius.is_finite() && radius >= MIN_ENTITY_RADIUS {
            radius
        } else {
            log::warn!("Entity radius {radius} raised to {MIN_ENTITY_RADIUS}");
            MIN_ENTITY_RADIUS
        };
        Self {
            pos,
            radius,
            role,
            speed: speed.max(0.0),
        }
    }

    pub fn player(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self::new(Role::Player, pos, radius, speed)
    }

    pub fn target(pos: Vec2, radius: f32) -> Self {
        Self::new(Role::Target, pos, radius, 0.0)
    }

    pub fn enemy(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self::new(Role::Enemy, pos, radius, speed)
    }

    pub fn generic(pos: Vec2, radius: f32) -> Self {
        Self::new(Role::Generic, pos, radius, 0.0)
    }

    /// Radius is fixed at creation
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}
