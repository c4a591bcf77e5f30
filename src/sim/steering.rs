//! Seek and flee steering
//!
//! Velocities here are in units per second; the tick integrates them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FLEE_MAX_SPEED, FLEE_THRESHOLD, FLEE_WEIGHT};

/// Weighted attraction tuning
///
/// A positive `weight` pulls toward the other point, a negative one pushes
/// away. The sign is configuration, not baked into the formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringParams {
    /// No force beyond this distance
    pub threshold: f32,
    /// Force magnitude at zero distance (signed)
    pub weight: f32,
    /// Cap on the resulting speed
    pub max_speed: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            threshold: FLEE_THRESHOLD,
            weight: FLEE_WEIGHT,
            max_speed: FLEE_MAX_SPEED,
        }
    }
}

impl SteeringParams {
    /// Capped velocity for an entity at `from` reacting to `to`
    pub fn velocity(&self, from: Vec2, to: Vec2, epsilon: f32) -> Vec2 {
        weighted_attraction(from, to, self.threshold, self.weight, epsilon)
            .clamp_length_max(self.max_speed)
    }
}

/// Linear-falloff attraction from `from` toward `to`
///
/// Zero beyond `threshold`. Inside it, the magnitude grows linearly as the
/// distance shrinks: `|weight| * (threshold - dist) / threshold`. Returns zero
/// when the points are within `epsilon` of each other.
pub fn weighted_attraction(
    from: Vec2,
    to: Vec2,
    threshold: f32,
    weight: f32,
    epsilon: f32,
) -> Vec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist < epsilon || dist > threshold || threshold <= 0.0 {
        return Vec2::ZERO;
    }

    let strength = weight * (threshold - dist) / threshold;
    delta / dist * strength
}

/// Constant-speed velocity toward `to`, or `None` within `epsilon`
pub fn seek(from: Vec2, to: Vec2, speed: f32, epsilon: f32) -> Option<Vec2> {
    let delta = to - from;
    let dist = delta.length();
    if dist <= epsilon {
        return None;
    }
    Some(delta / dist * speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.01;

    #[test]
    fn test_attraction_zero_beyond_threshold() {
        let v = weighted_attraction(Vec2::ZERO, Vec2::new(250.0, 0.0), 200.0, -400.0, EPS);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_attraction_linear_falloff() {
        // Halfway inside the threshold: half the weight
        let v = weighted_attraction(Vec2::ZERO, Vec2::new(100.0, 0.0), 200.0, 400.0, EPS);
        assert!((v - Vec2::new(200.0, 0.0)).length() < 1e-3);

        let closer = weighted_attraction(Vec2::ZERO, Vec2::new(50.0, 0.0), 200.0, 400.0, EPS);
        assert!(closer.length() > v.length());
    }

    #[test]
    fn test_negative_weight_repels() {
        let v = weighted_attraction(Vec2::ZERO, Vec2::new(0.0, 100.0), 200.0, -400.0, EPS);
        assert!(v.y < 0.0);
        assert!(v.x.abs() < 1e-6);
    }

    #[test]
    fn test_attraction_degenerate_distance() {
        let v = weighted_attraction(Vec2::ONE, Vec2::ONE, 200.0, -400.0, EPS);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_params_cap_speed() {
        let params = SteeringParams::default();
        // 10 units away: raw strength 380, capped at 160
        let v = params.velocity(Vec2::ZERO, Vec2::new(10.0, 0.0), EPS);
        assert!((v.length() - FLEE_MAX_SPEED).abs() < 1e-3);
        assert!(v.x < 0.0);
    }

    #[test]
    fn test_seek() {
        let v = seek(Vec2::ZERO, Vec2::new(3.0, 4.0), 10.0, EPS).unwrap();
        assert!((v - Vec2::new(6.0, 8.0)).length() < 1e-5);
        assert!(seek(Vec2::ZERO, Vec2::new(0.001, 0.0), 10.0, EPS).is_none());
    }
}
