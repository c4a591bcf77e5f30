//! Abstract draw calls
//!
//! The core never talks to a graphics library. A frame is described through
//! the `Canvas` trait; hosts implement it on top of whatever they render with,
//! or record it into a `DrawList`.

pub mod color;

pub use color::Color;

use glam::Vec2;

use crate::sim::GameState;

/// Sink for one frame's draw calls
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Circle { center: Vec2, radius: f32, color: Color },
    Text { text: String, pos: Vec2, size: f32, color: Color },
}

/// Canvas that records commands in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius, color } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replay the recorded commands onto another canvas
    pub fn replay(&self, canvas: &mut impl Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => canvas.draw_circle(*center, *radius, *color),
                DrawCommand::Text {
                    text,
                    pos,
                    size,
                    color,
                } => canvas.draw_text(text, *pos, *size, *color),
            }
        }
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}

/// HUD font sizes
const HUD_TEXT_SIZE: f32 = 20.0;
const TITLE_SIZE: f32 = 40.0;
const FINAL_SCORE_SIZE: f32 = 30.0;
const RESTART_HINT_SIZE: f32 = 28.0;

/// Describe the current frame: HUD plus one circle per entity, or the
/// game-over screen
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(Color::RAYWHITE);

    if state.is_game_over() {
        let mid = state.registry.field().center();
        canvas.draw_text("Game Over!", mid + Vec2::new(-100.0, -40.0), TITLE_SIZE, Color::RED);
        canvas.draw_text(
            &format!("Final Score: {}", state.score()),
            mid + Vec2::new(-100.0, 10.0),
            FINAL_SCORE_SIZE,
            Color::DARKGRAY,
        );
        canvas.draw_text(
            "Press R to Restart",
            mid + Vec2::new(-120.0, 60.0),
            RESTART_HINT_SIZE,
            Color::DARKBLUE,
        );
        return;
    }

    canvas.draw_text(
        "Catch the moving dot!",
        Vec2::new(10.0, 10.0),
        HUD_TEXT_SIZE,
        Color::DARKGRAY,
    );
    canvas.draw_text(
        &format!("Score: {}", state.score()),
        Vec2::new(10.0, 40.0),
        HUD_TEXT_SIZE,
        Color::DARKGRAY,
    );

    for (_, pos, radius, role) in state.entities() {
        canvas.draw_circle(pos, radius, Color::for_role(role));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Entity, TickInput};

    #[test]
    fn test_playing_frame() {
        let mut state = GameState::empty(Settings::default());
        state.spawn(Entity::player(Vec2::new(400.0, 300.0), 15.0, 200.0));
        state.spawn(Entity::target(Vec2::new(100.0, 100.0), 10.0));

        let mut list = DrawList::new();
        draw_frame(&state, &mut list);

        assert_eq!(list.commands[0], DrawCommand::Clear(Color::RAYWHITE));
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Catch the moving dot!", "Score: 0"]);
        let circles: Vec<_> = list.circles().collect();
        assert_eq!(
            circles,
            vec![
                (Vec2::new(400.0, 300.0), 15.0, Color::BLUE),
                (Vec2::new(100.0, 100.0), 10.0, Color::RED),
            ]
        );
    }

    #[test]
    fn test_game_over_frame_hides_entities() {
        let mut state = GameState::empty(Settings::default());
        state.spawn(Entity::player(Vec2::new(400.0, 300.0), 15.0, 200.0));
        state.spawn(Entity::enemy(Vec2::new(405.0, 300.0), 12.0, 120.0));
        state.step(&TickInput::default(), 0.016).unwrap();
        assert!(state.is_game_over());

        let mut list = DrawList::new();
        draw_frame(&state, &mut list);

        assert_eq!(list.circles().count(), 0);
        assert_eq!(
            list.texts().collect::<Vec<_>>(),
            vec!["Game Over!", "Final Score: 0", "Press R to Restart"]
        );
    }

    #[test]
    fn test_replay_reproduces_commands() {
        let mut list = DrawList::new();
        list.clear(Color::RAYWHITE);
        list.draw_circle(Vec2::new(1.0, 2.0), 3.0, Color::RED);
        list.draw_text("hi", Vec2::ZERO, 12.0, Color::DARKGRAY);

        let mut copy = DrawList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);
    }
}
