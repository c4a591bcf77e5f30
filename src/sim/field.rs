//! Play field geometry
//!
//! The field is an axis-aligned rectangle with its origin at the top-left
//! corner. A circle of radius `r` is inside the field when its center lies in
//! `[r, width - r] x [r, height - r]`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangular bounds containing every entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the field
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a circle of this radius fits anywhere in the field
    #[inline]
    pub fn fits(&self, radius: f32) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }

    /// Per-axis min/max clamp so the full circle stays inside
    ///
    /// Not a bounce: velocity is not reflected, the position just stops at the
    /// wall. When the circle is wider than the field the center is pinned to
    /// the middle of that axis.
    pub fn clamp(&self, pos: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            clamp_axis(pos.x, radius, self.width),
            clamp_axis(pos.y, radius, self.height),
        )
    }

    /// Whether the circle already satisfies the clamp bounds
    pub fn contains(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

#[inline]
fn clamp_axis(value: f32, radius: f32, extent: f32) -> f32 {
    let lo = radius;
    let hi = extent - radius;
    if lo > hi {
        return extent / 2.0;
    }
    value.clamp(lo, hi)
}
