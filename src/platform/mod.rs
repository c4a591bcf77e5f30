//! Frame driver
//!
//! The host owns the clock, the input device and the screen. The driver asks
//! it for one `FrameInput` per frame, steps the session and hands back the
//! frame's draw list. The session is passed in explicitly; nothing here keeps
//! global state.

pub mod autopilot;

pub use autopilot::Autopilot;

use crate::render::{DrawList, draw_frame};
use crate::sim::{GameEvent, GameState, SimResult, TickInput};

/// Everything the host reports for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub elapsed: f32,
    /// Directional snapshot for the behavior pass
    pub tick: TickInput,
    /// Restart requested (honored only after game over)
    pub reset: bool,
    /// Shut down at this frame boundary
    pub quit: bool,
}

/// Platform side of the loop
pub trait FrameHost {
    /// Sample the clock and input for the next frame
    fn poll(&mut self, state: &GameState) -> FrameInput;

    /// Show a finished frame
    fn present(&mut self, state: &GameState, frame: &DrawList, events: &[GameEvent]);
}

/// Totals collected while the loop ran
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    /// Runs started, counting the initial one
    pub games: u32,
    pub catches: u64,
    pub best_score: u64,
    pub final_score: u64,
}

impl RunSummary {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::TargetCaught { score, .. } => {
                    self.catches += 1;
                    self.best_score = self.best_score.max(*score);
                }
                GameEvent::Reset => self.games += 1,
                GameEvent::GameOver { .. } | GameEvent::TargetRespawned { .. } => {}
            }
        }
    }
}

/// Run frames until the host asks to quit
///
/// Shutdown is checked once per frame boundary. A placement failure ends the
/// loop and is returned to the caller.
pub fn run<H: FrameHost>(state: &mut GameState, host: &mut H) -> SimResult<RunSummary> {
    let mut summary = RunSummary {
        games: 1,
        ..Default::default()
    };
    let mut frame = DrawList::new();
    let mut shutting_down = false;

    while !shutting_down {
        let input = host.poll(state);
        if input.quit {
            shutting_down = true;
            log::info!("Shutdown requested after {} frames", summary.frames);
            continue;
        }

        if input.reset {
            if state.is_game_over() {
                state.reset()?;
            } else {
                log::debug!("Ignoring reset request while playing");
            }
        }

        let dt = input.elapsed.clamp(0.0, state.settings.max_frame_dt);
        state.step(&input.tick, dt)?;

        let events = state.drain_events();
        summary.record(&events);

        frame.clear_commands();
        draw_frame(state, &mut frame);
        host.present(state, &frame, &events);
        summary.frames += 1;
    }

    summary.final_score = state.score();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Entity;
    use glam::Vec2;

    /// Replays a fixed input script, then quits
    struct Scripted {
        script: Vec<FrameInput>,
        cursor: usize,
        presented: Vec<DrawList>,
        elapsed_seen: Vec<f32>,
    }

    impl Scripted {
        fn new(script: Vec<FrameInput>) -> Self {
            Self {
                script,
                cursor: 0,
                presented: Vec::new(),
                elapsed_seen: Vec::new(),
            }
        }
    }

    impl FrameHost for Scripted {
        fn poll(&mut self, _state: &GameState) -> FrameInput {
            let input = self.script.get(self.cursor).copied().unwrap_or(FrameInput {
                quit: true,
                ..Default::default()
            });
            self.cursor += 1;
            self.elapsed_seen.push(input.elapsed);
            input
        }

        fn present(&mut self, _state: &GameState, frame: &DrawList, _events: &[GameEvent]) {
            self.presented.push(frame.clone());
        }
    }

    fn frame(elapsed: f32) -> FrameInput {
        FrameInput {
            elapsed,
            ..Default::default()
        }
    }

    #[test]
    fn test_run_until_quit() {
        let mut state = GameState::new(Settings::default()).unwrap();
        let mut host = Scripted::new(vec![frame(0.016); 5]);

        let summary = run(&mut state, &mut host).unwrap();
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.games, 1);
        assert_eq!(host.presented.len(), 5);
        assert_eq!(state.frames(), 5);
    }

    #[test]
    fn test_elapsed_is_clamped() {
        let mut state = GameState::empty(Settings::default());
        let player = state.spawn(Entity::player(Vec2::new(400.0, 300.0), 15.0, 200.0));
        let input = FrameInput {
            elapsed: 5.0,
            tick: TickInput {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut host = Scripted::new(vec![input]);

        run(&mut state, &mut host).unwrap();
        // 200 units/s * 0.1 s max frame
        assert!((state.entity(player).unwrap().pos.x - 420.0).abs() < 1e-3);
    }

    #[test]
    fn test_reset_only_after_game_over() {
        let mut state = GameState::empty(Settings::default());
        state.spawn(Entity::player(Vec2::new(400.0, 300.0), 15.0, 200.0));
        state.spawn(Entity::enemy(Vec2::new(405.0, 300.0), 12.0, 120.0));

        let reset = FrameInput {
            elapsed: 0.016,
            reset: true,
            ..Default::default()
        };
        let mut host = Scripted::new(vec![frame(0.016), frame(0.016), reset]);

        let summary = run(&mut state, &mut host).unwrap();
        assert_eq!(summary.games, 2);
        assert!(!state.is_game_over());
        // Reset repopulates from settings: player, target, enemy
        assert_eq!(state.registry.len(), 3);

        // The game-over frame shows the restart hint
        assert!(host.presented[1].texts().any(|t| t == "Press R to Restart"));
    }

    #[test]
    fn test_redundant_reset_is_ignored() {
        let mut state = GameState::empty(Settings::default());
        let player = state.spawn(Entity::player(Vec2::new(400.0, 300.0), 15.0, 200.0));
        let reset = FrameInput {
            elapsed: 0.016,
            reset: true,
            ..Default::default()
        };
        let mut host = Scripted::new(vec![reset, reset]);

        let summary = run(&mut state, &mut host).unwrap();
        assert_eq!(summary.games, 1);
        assert_eq!(state.registry.len(), 1);
        assert_eq!(state.entity(player).unwrap().pos, Vec2::new(400.0, 300.0));
    }
}
