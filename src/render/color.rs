//! RGBA colors and the role palette

use serde::{Deserialize, Serialize};

use crate::sim::Role;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
    pub const DARKGRAY: Color = Color::rgb(80, 80, 80);
    pub const GRAY: Color = Color::rgb(130, 130, 130);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const DARKBLUE: Color = Color::rgb(0, 82, 172);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const DARKGREEN: Color = Color::rgb(0, 117, 44);

    /// Color an entity is drawn with
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Player => Color::BLUE,
            Role::Target => Color::RED,
            Role::Enemy => Color::DARKGREEN,
            Role::Generic => Color::GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_have_distinct_colors() {
        let colors = [Role::Player, Role::Target, Role::Enemy, Role::Generic].map(Color::for_role);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
