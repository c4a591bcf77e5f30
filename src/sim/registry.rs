//! Entity registry
//!
//! Owns every live entity in one arena. Everything else refers to entities by
//! `EntityId`, which stays valid until the registry is cleared on reset.

use glam::Vec2;
use rand::Rng;

use super::collision::circles_overlap;
use super::entity::{Entity, EntityId, Role};
use super::error::{SimError, SimResult};
use super::field::PlayField;

#[derive(Debug, Clone)]
pub struct Registry {
    field: PlayField,
    entities: Vec<Entity>,
    max_placement_attempts: u32,
}

impl Registry {
    pub fn new(field: PlayField, max_placement_attempts: u32) -> Self {
        Self {
            field,
            entities: Vec::new(),
            max_placement_attempts,
        }
    }

    #[inline]
    pub fn field(&self) -> &PlayField {
        &self.field
    }

    /// Insert an entity and return its handle
    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(entity);
        id
    }

    /// Drop every entity; previously issued handles become invalid
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Iterate entities with their handles, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i as u32), e))
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + use<> {
        (0..self.entities.len() as u32).map(EntityId)
    }

    /// Every unordered pair `(i, j)` with `i < j`
    ///
    /// Lazy and finite; calling it again starts over.
    pub fn all_pairs(&self) -> impl Iterator<Item = (EntityId, EntityId)> + use<> {
        let n = self.entities.len() as u32;
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (EntityId(i), EntityId(j))))
    }

    /// First entity with the given role
    pub fn find_by_role(&self, role: Role) -> Option<EntityId> {
        self.iter().find(|(_, e)| e.role == role).map(|(id, _)| id)
    }

    /// True if a circle at `pos` overlaps no entity
    pub fn valid_position(&self, pos: Vec2, radius: f32) -> bool {
        self.valid_position_ignoring(pos, radius, None)
    }

    /// Like `valid_position`, skipping one entity (the one being moved)
    pub fn valid_position_ignoring(
        &self,
        pos: Vec2,
        radius: f32,
        ignore: Option<EntityId>,
    ) -> bool {
        self.iter()
            .filter(|(id, _)| Some(*id) != ignore)
            .all(|(_, e)| !circles_overlap(pos, radius, e.pos, e.radius()))
    }

    /// Sample uniform positions until one is free
    pub fn random_valid_position<R: Rng>(&self, radius: f32, rng: &mut R) -> SimResult<Vec2> {
        self.random_valid_position_ignoring(radius, None, rng)
    }

    /// Sample a free position, skipping one entity in the overlap test
    ///
    /// Samples are drawn from the clamp range so the result is always inside
    /// the field. Gives up after `max_placement_attempts`.
    pub fn random_valid_position_ignoring<R: Rng>(
        &self,
        radius: f32,
        ignore: Option<EntityId>,
        rng: &mut R,
    ) -> SimResult<Vec2> {
        let attempts = self.max_placement_attempts;
        if !self.field.fits(radius) {
            return Err(SimError::Placement { radius, attempts: 0 });
        }

        let (x_lo, x_hi) = (radius, self.field.width - radius);
        let (y_lo, y_hi) = (radius, self.field.height - radius);

        for _ in 0..attempts {
            let candidate = Vec2::new(rng.random_range(x_lo..=x_hi), rng.random_range(y_lo..=y_hi));
            if self.valid_position_ignoring(candidate, radius, ignore) {
                return Ok(candidate);
            }
        }

        Err(SimError::Placement { radius, attempts })
    }

    /// Adjust a position so the whole circle stays in the field
    #[inline]
    pub fn clamp_to_field(&self, pos: Vec2, radius: f32) -> Vec2 {
        self.field.clamp(pos, radius)
    }

    /// Move an entity, clamping to the field
    pub fn set_position(&mut self, id: EntityId, pos: Vec2) {
        let field = self.field;
        if let Some(entity) = self.entities.get_mut(id.index()) {
            entity.pos = field.clamp(pos, entity.radius());
        }
    }
}
