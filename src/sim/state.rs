//! Game session state
//!
//! Owns the registry, the score and the phase. The session is passed
//! explicitly to whoever drives it; there is no global instance.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityId, Role};
use super::error::SimResult;
use super::registry::Registry;
use super::tick::{TickInput, tick};
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player touched an enemy; only `reset` leaves this phase
    GameOver,
}

/// Things that happened during a step, drained by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    TargetCaught { target: EntityId, score: u64 },
    TargetRespawned { target: EntityId, pos: Vec2 },
    GameOver { score: u64 },
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub registry: Registry,
    pub(crate) rng: Pcg32,
    pub(crate) score: u64,
    pub(crate) phase: GamePhase,
    /// Frames stepped while playing since the last reset
    pub(crate) frames: u64,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session and place the configured entities
    pub fn new(settings: Settings) -> SimResult<Self> {
        let mut state = Self::empty(settings);
        state.registry = roster(&state.settings, &mut state.rng)?;
        log::info!(
            "New session: {} entities in {}x{} field (seed {})",
            state.registry.len(),
            state.settings.field_width,
            state.settings.field_height,
            state.settings.seed
        );
        Ok(state)
    }

    /// A session with no entities; callers place them with `spawn`
    pub fn empty(settings: Settings) -> Self {
        let registry = Registry::new(settings.field(), settings.max_placement_attempts);
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            registry,
            score: 0,
            phase: GamePhase::Playing,
            frames: 0,
            events: Vec::new(),
        }
    }

    /// Add an entity, clamped into the field
    pub fn spawn(&mut self, mut entity: Entity) -> EntityId {
        entity.pos = self.registry.clamp_to_field(entity.pos, entity.radius());
        self.registry.add(entity)
    }

    /// Back to a fresh Playing session with newly placed entities
    ///
    /// Always allowed, including while already playing. The RNG is not
    /// reseeded, so consecutive runs get different layouts. Handles issued
    /// before the reset are not carried over: they may name a different
    /// entity afterwards. If the roster cannot be placed the previous session
    /// is kept as is.
    pub fn reset(&mut self) -> SimResult<()> {
        let registry = roster(&self.settings, &mut self.rng)?;
        self.registry = registry;
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.frames = 0;
        self.events.push(GameEvent::Reset);
        log::info!("Session reset ({} entities)", self.registry.len());
        Ok(())
    }

    /// Advance one frame
    pub fn step(&mut self, input: &TickInput, dt: f32) -> SimResult<()> {
        tick(self, input, dt)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Entity snapshot for rendering: (handle, position, radius, role)
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, Vec2, f32, Role)> + '_ {
        self.registry.iter().map(|(id, e)| (id, e.pos, e.radius(), e.role))
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.registry.get(id)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.registry.find_by_role(Role::Player).and_then(|id| self.registry.get(id))
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Build the configured roster in a fresh registry: player in the middle,
/// then targets and enemies at random free positions
fn roster(settings: &Settings, rng: &mut Pcg32) -> SimResult<Registry> {
    let mut registry = Registry::new(settings.field(), settings.max_placement_attempts);

    let center = registry.field().center();
    let center = registry.clamp_to_field(center, settings.player_radius);
    registry.add(Entity::player(center, settings.player_radius, settings.player_speed));

    for _ in 0..settings.target_count {
        let pos = registry.random_valid_position(settings.target_radius, rng)?;
        registry.add(Entity::target(pos, settings.target_radius));
    }
    for _ in 0..settings.enemy_count {
        let pos = registry.random_valid_position(settings.enemy_radius, rng)?;
        registry.add(Entity::enemy(pos, settings.enemy_radius, settings.enemy_speed));
    }

    Ok(registry)
}
