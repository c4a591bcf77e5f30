//! Property tests for the frame step

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use dot_chase::Settings;
use dot_chase::sim::{Entity, GameEvent, GameState, Role, TickInput, circles_overlap};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

fn npc_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Target), Just(Role::Enemy), Just(Role::Generic)]
}

fn npc() -> impl Strategy<Value = Entity> {
    (npc_role(), -50.0..850.0f32, -50.0..650.0f32, 3.0..25.0f32, 0.0..250.0f32)
        .prop_map(|(role, x, y, radius, speed)| Entity::new(role, Vec2::new(x, y), radius, speed))
}

fn player() -> impl Strategy<Value = Entity> {
    (0.0..800.0f32, 0.0..600.0f32, 5.0..25.0f32, 0.0..300.0f32)
        .prop_map(|(x, y, radius, speed)| Entity::player(Vec2::new(x, y), radius, speed))
}

fn input() -> impl Strategy<Value = TickInput> {
    any::<(bool, bool, bool, bool)>().prop_map(|(up, down, left, right)| TickInput {
        up,
        down,
        left,
        right,
    })
}

fn frames() -> impl Strategy<Value = Vec<(TickInput, f32)>> {
    prop::collection::vec((input(), 0.0..0.1f32), 1..40)
}

fn session(player: Entity, npcs: Vec<Entity>, seed: u64) -> GameState {
    let mut state = GameState::empty(Settings {
        seed,
        ..Default::default()
    });
    state.spawn(player);
    for npc in npcs {
        state.spawn(npc);
    }
    state
}

fn snapshot(state: &GameState) -> Vec<Vec2> {
    state.entities().map(|(_, pos, _, _)| pos).collect()
}

proptest! {
    #[test]
    fn positions_stay_in_field(
        player in player(),
        npcs in prop::collection::vec(npc(), 0..6),
        seed in any::<u64>(),
        frames in frames(),
    ) {
        let mut state = session(player, npcs, seed);
        for (input, dt) in frames {
            if state.step(&input, dt).is_err() {
                break;
            }
            for (_, pos, radius, _) in state.entities() {
                let in_x = pos.x >= radius && pos.x <= WIDTH - radius;
                let in_y = pos.y >= radius && pos.y <= HEIGHT - radius;
                prop_assert!(in_x, "x {} r {}", pos.x, radius);
                prop_assert!(in_y, "y {} r {}", pos.y, radius);
            }
        }
    }

    #[test]
    fn score_only_grows_by_catches(
        player in player(),
        npcs in prop::collection::vec(npc(), 0..6),
        seed in any::<u64>(),
        frames in frames(),
    ) {
        let mut state = session(player, npcs, seed);
        let mut last = state.score();
        for (input, dt) in frames {
            if state.step(&input, dt).is_err() {
                break;
            }
            let caught = state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::TargetCaught { .. }))
                .count() as u64;
            prop_assert!(state.score() >= last);
            prop_assert_eq!(state.score() - last, caught);
            last = state.score();
        }
    }

    #[test]
    fn game_over_is_absorbing(
        player in player(),
        npcs in prop::collection::vec(npc(), 0..6),
        seed in any::<u64>(),
        frames in frames(),
    ) {
        let mut state = session(player, npcs, seed);
        let mut frozen: Option<(u64, Vec<Vec2>)> = None;
        for (input, dt) in frames {
            if state.step(&input, dt).is_err() {
                break;
            }
            if let Some((score, positions)) = &frozen {
                prop_assert!(state.is_game_over());
                prop_assert_eq!(state.score(), *score);
                prop_assert_eq!(&snapshot(&state), positions);
            } else if state.is_game_over() {
                frozen = Some((state.score(), snapshot(&state)));
            }
        }
    }

    #[test]
    fn respawn_positions_are_free(
        player in player(),
        npcs in prop::collection::vec(npc(), 0..8),
        radius in 3.0..30.0f32,
        seed in any::<u64>(),
    ) {
        let state = session(player, npcs, 0);
        let mut rng = Pcg32::seed_from_u64(seed);
        if let Ok(pos) = state.registry.random_valid_position(radius, &mut rng) {
            prop_assert!(state.registry.field().contains(pos, radius));
            for (_, other, other_radius, _) in state.entities() {
                prop_assert!(!circles_overlap(pos, radius, other, other_radius));
            }
        }
    }
}
