//! Per-frame simulation step
//!
//! One call advances the session by `dt` seconds:
//! 1. Collision pass: plan against a read-only registry, then apply
//! 2. Behavior pass: every entity moves by its role's steering rule

use glam::Vec2;

use super::collision::plan_collisions;
use super::entity::Role;
use super::error::SimResult;
use super::state::{GameEvent, GamePhase, GameState};
use super::steering::seek;

/// Cardinal input directions (screen space, +Y points down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

/// Directional input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Input with the given directions held
    pub fn held(directions: &[Direction]) -> Self {
        directions.iter().fold(Self::default(), |input, &d| input.with(d))
    }

    pub fn with(mut self, direction: Direction) -> Self {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
        self
    }

    /// Unit movement direction; opposite keys cancel, diagonals are not faster
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        for (held, d) in [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ] {
            if held {
                dir += d.vector();
            }
        }
        dir.normalize_or_zero()
    }
}

/// Advance the session by one frame
///
/// A no-op while the session is over. Negative or non-finite `dt` is treated
/// as zero. Fails only when a caught target cannot be respawned, in which
/// case the session is left as it was before the call.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> SimResult<()> {
    if state.phase == GamePhase::GameOver {
        return Ok(());
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    resolve_collisions(state)?;
    state.frames += 1;
    if state.phase == GamePhase::GameOver {
        log::info!("Game over after {} frames, final score {}", state.frames, state.score);
        return Ok(());
    }

    move_entities(state, input, dt);
    Ok(())
}

/// Plan the sweep, then apply pushes, score and respawns in that order
///
/// Everything is staged on a copy of the registry and committed only once
/// every respawn has found a free spot.
fn resolve_collisions(state: &mut GameState) -> SimResult<()> {
    let plan = plan_collisions(&state.registry);
    if plan.is_empty() {
        return Ok(());
    }

    let mut staged = state.registry.clone();
    for (id, displacement) in staged.ids().zip(&plan.displacements) {
        if *displacement == Vec2::ZERO {
            continue;
        }
        if let Some(pos) = staged.get(id).map(|e| e.pos) {
            staged.set_position(id, pos + *displacement);
        }
    }

    let score = state.score + plan.score_delta;
    let mut events = Vec::with_capacity(plan.respawns.len() * 2 + 1);
    for &target in &plan.respawns {
        let Some(radius) = staged.get(target).map(|e| e.radius()) else {
            continue;
        };
        let pos = staged
            .random_valid_position_ignoring(radius, Some(target), &mut state.rng)
            .inspect_err(|err| log::warn!("Could not respawn target {target}: {err}"))?;
        staged.set_position(target, pos);
        events.push(GameEvent::TargetCaught { target, score });
        events.push(GameEvent::TargetRespawned { target, pos });
        log::debug!(
            "Target {target} caught, respawned at ({:.1}, {:.1}), score {}",
            pos.x,
            pos.y,
            score
        );
    }

    if plan.game_over {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { score });
    }
    state.registry = staged;
    state.score = score;
    state.events.extend(events);
    Ok(())
}

/// Role-specific steering against the player's post-collision position
fn move_entities(state: &mut GameState, input: &TickInput, dt: f32) {
    let player_pos = state
        .registry
        .find_by_role(Role::Player)
        .and_then(|id| state.registry.get(id))
        .map(|p| p.pos);
    let epsilon = state.settings.steer_epsilon;
    let flee = state.settings.flee;
    let input_dir = input.direction();

    for id in state.registry.ids() {
        let Some(entity) = state.registry.get(id) else {
            continue;
        };
        let pos = entity.pos;

        let velocity = match entity.role {
            Role::Player => Some(input_dir * entity.speed),
            Role::Target => player_pos.map(|target| flee.velocity(pos, target, epsilon)),
            Role::Enemy => player_pos.and_then(|target| seek(pos, target, entity.speed, epsilon)),
            Role::Generic => None,
        };

        if let Some(velocity) = velocity {
            state.registry.set_position(id, pos + velocity * dt);
        }
    }
}
