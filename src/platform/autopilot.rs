//! Headless demo host
//!
//! Plays the game by itself: chases the nearest target, veers away from
//! enemies that get too close, and restarts after a game over while it has
//! restarts left. Used by the native binary and for soak testing.

use glam::Vec2;

use super::{FrameHost, FrameInput};
use crate::render::DrawList;
use crate::sim::{GameEvent, GameState, Role, TickInput};

/// Enemies closer than this override target chasing
const DANGER_RADIUS: f32 = 120.0;
/// How much harder fleeing pulls than chasing
const FLEE_BIAS: f32 = 2.5;
/// Fraction of the desired vector an axis needs before its key is pressed
const AXIS_DEADZONE: f32 = 0.3;

#[derive(Debug, Clone)]
pub struct Autopilot {
    frame_dt: f32,
    frames_left: u64,
    restarts_left: u32,
}

impl Autopilot {
    pub fn new(frames: u64, frame_dt: f32, restarts: u32) -> Self {
        Self {
            frame_dt,
            frames_left: frames,
            restarts_left: restarts,
        }
    }

    /// Desired movement for the player this frame
    fn steer(state: &GameState) -> Vec2 {
        let Some(player) = state.player() else {
            return Vec2::ZERO;
        };
        let here = player.pos;

        let nearest = |role: Role| {
            state
                .entities()
                .filter(|(_, _, _, r)| *r == role)
                .map(|(_, pos, _, _)| pos)
                .min_by(|a, b| a.distance_squared(here).total_cmp(&b.distance_squared(here)))
        };

        let mut desired = nearest(Role::Target)
            .map(|t| (t - here).normalize_or_zero())
            .unwrap_or(Vec2::ZERO);

        if let Some(enemy) = nearest(Role::Enemy) {
            let away = here - enemy;
            let dist = away.length();
            if dist < DANGER_RADIUS {
                let urgency = 1.0 - dist / DANGER_RADIUS;
                desired += away.normalize_or_zero() * FLEE_BIAS * urgency;
            }
        }

        desired
    }

    fn to_input(desired: Vec2) -> TickInput {
        let len = desired.length();
        if len < f32::EPSILON {
            return TickInput::default();
        }
        let d = desired / len;
        TickInput {
            up: d.y < -AXIS_DEADZONE,
            down: d.y > AXIS_DEADZONE,
            left: d.x < -AXIS_DEADZONE,
            right: d.x > AXIS_DEADZONE,
        }
    }
}

impl FrameHost for Autopilot {
    fn poll(&mut self, state: &GameState) -> FrameInput {
        if self.frames_left == 0 {
            return FrameInput {
                quit: true,
                ..Default::default()
            };
        }
        self.frames_left -= 1;

        let reset = state.is_game_over() && self.restarts_left > 0;
        if reset {
            self.restarts_left -= 1;
        }

        FrameInput {
            elapsed: self.frame_dt,
            tick: Self::to_input(Self::steer(state)),
            reset,
            quit: false,
        }
    }

    fn present(&mut self, state: &GameState, frame: &DrawList, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::TargetCaught { score, .. } => log::info!("Caught a dot! Score: {score}"),
                GameEvent::GameOver { score } => log::info!("Game over, final score {score}"),
                GameEvent::Reset => log::info!("Restarting"),
                GameEvent::TargetRespawned { .. } => {}
            }
        }
        log::trace!(
            "frame {}: {} draw calls",
            state.frames(),
            frame.commands.len()
        );
    }
}
