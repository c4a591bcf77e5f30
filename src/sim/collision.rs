//! Circle collision detection and the per-frame collision plan
//!
//! Collision handling is split in two phases. `plan_collisions` sweeps every
//! pair against a read-only registry and records what should happen; the tick
//! applies the plan afterwards. A pair never observes a mutation caused by an
//! earlier pair in the same sweep.

use glam::Vec2;

use super::entity::{EntityId, Role};
use super::registry::Registry;

/// Contact between two overlapping circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the first circle's center toward the second
    pub normal: Vec2,
    /// Overlap depth (sum of radii minus center distance)
    pub penetration: f32,
}

/// Strict overlap test: circles that exactly touch do not collide
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < reach * reach
}

/// Contact info if the circles overlap
///
/// Coincident centers have no defined direction, so they separate along +X.
pub fn circle_contact(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> Option<Contact> {
    if !circles_overlap(a_pos, a_radius, b_pos, b_radius) {
        return None;
    }

    let delta = b_pos - a_pos;
    let dist = delta.length();
    let normal = if dist > f32::EPSILON { delta / dist } else { Vec2::X };

    Some(Contact {
        normal,
        penetration: a_radius + b_radius - dist,
    })
}

/// Displacements that push two overlapping circles apart, half the overlap each
#[inline]
pub fn separation(contact: &Contact) -> (Vec2, Vec2) {
    let half = contact.normal * (contact.penetration * 0.5);
    (-half, half)
}

/// What a colliding pair does, decided by the pair's roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairPolicy {
    /// Player caught a target: score and respawn the target
    Catch { target: EntityId },
    /// Enemy reached the player: run ends
    Fatal,
    /// Anything else bounces apart
    PushApart,
}

impl PairPolicy {
    pub fn classify(a: (EntityId, Role), b: (EntityId, Role)) -> Self {
        match (a.1, b.1) {
            (Role::Player, Role::Target) => PairPolicy::Catch { target: b.0 },
            (Role::Target, Role::Player) => PairPolicy::Catch { target: a.0 },
            (Role::Player, Role::Enemy) | (Role::Enemy, Role::Player) => PairPolicy::Fatal,
            _ => PairPolicy::PushApart,
        }
    }
}

/// Side effects collected by one collision sweep
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionPlan {
    /// Set when a player touched an enemy; the sweep stopped at that pair
    pub game_over: bool,
    /// Points earned this frame
    pub score_delta: u64,
    /// Targets to respawn, in first-caught order, without duplicates
    pub respawns: Vec<EntityId>,
    /// Accumulated push-apart displacement per entity (indexed by handle)
    pub displacements: Vec<Vec2>,
}

impl CollisionPlan {
    fn new(entity_count: usize) -> Self {
        Self {
            displacements: vec![Vec2::ZERO; entity_count],
            ..Default::default()
        }
    }

    /// Whether applying the plan changes anything
    pub fn is_empty(&self) -> bool {
        !self.game_over
            && self.score_delta == 0
            && self.respawns.is_empty()
            && self.displacements.iter().all(|d| *d == Vec2::ZERO)
    }
}

/// Sweep all pairs and collect the collision side effects
///
/// Stops at the first fatal pair. Effects recorded by earlier pairs stay in
/// the plan; later pairs are not examined.
pub fn plan_collisions(registry: &Registry) -> CollisionPlan {
    let mut plan = CollisionPlan::new(registry.len());

    for (id_a, id_b) in registry.all_pairs() {
        let (Some(a), Some(b)) = (registry.get(id_a), registry.get(id_b)) else {
            continue;
        };
        let Some(contact) = circle_contact(a.pos, a.radius(), b.pos, b.radius()) else {
            continue;
        };

        match PairPolicy::classify((id_a, a.role), (id_b, b.role)) {
            PairPolicy::Catch { target } => {
                plan.score_delta += 1;
                if !plan.respawns.contains(&target) {
                    plan.respawns.push(target);
                }
            }
            PairPolicy::Fatal => {
                plan.game_over = true;
                break;
            }
            PairPolicy::PushApart => {
                let (push_a, push_b) = separation(&contact);
                plan.displacements[id_a.index()] += push_a;
                plan.displacements[id_b.index()] += push_b;
            }
        }
    }

    plan
}
