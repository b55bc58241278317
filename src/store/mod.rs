//! Entity/component storage for the simulation
//!
//! The engine never binds to a concrete container: it consumes the
//! [`BodyStore`] capability trait, which exposes the population as parallel
//! columns plus point lookup by identity. [`World`] is the dense-arena
//! implementation used by the runner, the predictor's scratch copies, and the
//! tests.
//!
//! Identities are stable for the whole simulation session: respawning an
//! entity replaces its components in place and reuses the same [`EntityId`],
//! so no identity is ever freed or reallocated.

use crate::simulation::components::{Physics2d, Transform2d};

/// Stable opaque handle for a simulated entity
///
/// An identity is an index into the dense arena; it stays valid for the whole
/// session and is reused (via [`World::respawn`]) rather than freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Capability interface the integration engine depends on
///
/// - `columns` / `columns_mut` expose the population as parallel identity,
///   transform, and body slices; the mutable form hands out disjoint borrows
///   so the velocity and position passes can split them across threads
/// - `get` / `get_mut` are point lookups for collaborators that reset or
///   teleport a specific body
/// - `clone_population` value-copies every entity into an isolated scratch
///   [`World`], preserving identities; only the orbit predictor needs it
///
/// Callers are responsible for only submitting identities obtained from the
/// store; the engine does not validate them beyond the `Option` returns here.
pub trait BodyStore: Sync {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn columns(&self) -> (&[EntityId], &[Transform2d], &[Physics2d]);

    fn columns_mut(&mut self) -> (&[EntityId], &mut [Transform2d], &mut [Physics2d]);

    fn get(&self, id: EntityId) -> Option<(&Transform2d, &Physics2d)>;

    fn get_mut(&mut self, id: EntityId) -> Option<(&mut Transform2d, &mut Physics2d)>;

    /// Copy every (identity, transform, body) triple into a fresh, isolated
    /// store. The copy shares no state with `self`; mutating it never touches
    /// the live population.
    fn clone_population(&self) -> World {
        let (entities, transforms, bodies) = self.columns();
        World {
            entities: entities.to_vec(),
            transforms: transforms.to_vec(),
            bodies: bodies.to_vec(),
        }
    }
}

/// Dense-arena store: one slot per entity, identity == slot index
///
/// Spawning appends a slot; respawning overwrites a slot in place. Slots are
/// never removed, which keeps every handed-out [`EntityId`] valid for the
/// session.
#[derive(Debug, Clone, Default)]
pub struct World {
    entities: Vec<EntityId>,
    transforms: Vec<Transform2d>,
    bodies: Vec<Physics2d>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity carrying both components, returning its identity
    pub fn spawn(&mut self, transform: Transform2d, body: Physics2d) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(id);
        self.transforms.push(transform);
        self.bodies.push(body);
        id
    }

    /// Replace an existing entity's components in place, reusing its identity
    ///
    /// Panics if `id` was not handed out by this store (caller precondition).
    pub fn respawn(&mut self, id: EntityId, transform: Transform2d, body: Physics2d) {
        let slot = id.index();
        self.transforms[slot] = transform;
        self.bodies[slot] = body;
    }

    /// Iterate all entities carrying both components
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Transform2d, &Physics2d)> + '_ {
        self.entities
            .iter()
            .zip(self.transforms.iter())
            .zip(self.bodies.iter())
            .map(|((id, transform), body)| (*id, transform, body))
    }
}

impl BodyStore for World {
    fn len(&self) -> usize {
        self.entities.len()
    }

    fn columns(&self) -> (&[EntityId], &[Transform2d], &[Physics2d]) {
        (&self.entities, &self.transforms, &self.bodies)
    }

    fn columns_mut(&mut self) -> (&[EntityId], &mut [Transform2d], &mut [Physics2d]) {
        (&self.entities, &mut self.transforms, &mut self.bodies)
    }

    fn get(&self, id: EntityId) -> Option<(&Transform2d, &Physics2d)> {
        let slot = id.index();
        Some((self.transforms.get(slot)?, self.bodies.get(slot)?))
    }

    fn get_mut(&mut self, id: EntityId) -> Option<(&mut Transform2d, &mut Physics2d)> {
        let slot = id.index();
        if slot >= self.entities.len() {
            return None;
        }
        Some((&mut self.transforms[slot], &mut self.bodies[slot]))
    }
}
