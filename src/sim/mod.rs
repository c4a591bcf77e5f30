//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - One synchronous step per frame
//! - Seeded RNG only
//! - Stable iteration order (registry insertion order)

pub mod collision;
pub mod entity;
pub mod error;
pub mod field;
pub mod registry;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{CollisionPlan, PairPolicy, circles_overlap, plan_collisions};
pub use entity::{Entity, EntityId, Role};
pub use error::{SimError, SimResult};
pub use field::PlayField;
pub use registry::Registry;
pub use state::{GameEvent, GamePhase, GameState};
pub use steering::{SteeringParams, seek, weighted_attraction};
pub use tick::{Direction, TickInput, tick};
