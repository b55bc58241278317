//! Off-line orbit prediction
//!
//! Runs the same two-phase physics as the live frame loop against an isolated
//! value-copy of the population, recording each body's position after every
//! iteration. Produces per-identity trajectory trails for visualization
//! without touching live state.

use std::collections::HashMap;

use nalgebra::Point2;

use super::gravity::{Gravity, PREDICTION_G};
use super::integrator::{update_positions_serial, update_velocities_serial};
use crate::store::{BodyStore, EntityId};

/// Ordered future positions for one body, earliest first
pub type Trail = Vec<Point2<f32>>;

/// Predicted trajectories keyed by the live bodies' identities
pub type TrajectorySet = HashMap<EntityId, Trail>;

/// Batch trajectory predictor
///
/// Carries its own force law, independent of the live simulation's: by
/// default the visualization-tuned variant (exaggerated constant, no
/// softening floor), but any [`Gravity`] can be supplied.
#[derive(Debug, Clone, Copy)]
pub struct OrbitPredictor {
    gravity: Gravity,
}

impl Default for OrbitPredictor {
    fn default() -> Self {
        Self {
            gravity: Gravity::prediction_tuned(PREDICTION_G),
        }
    }
}

impl OrbitPredictor {
    pub fn new(gravity: Gravity) -> Self {
        Self { gravity }
    }

    pub fn gravity(&self) -> &Gravity {
        &self.gravity
    }

    pub fn gravity_mut(&mut self) -> &mut Gravity {
        &mut self.gravity
    }

    /// Predict `iterations` future positions for every live body
    ///
    /// Copies the population into a scratch store, then repeats exactly
    /// `iterations` times: one velocity pass, one position pass, one recorded
    /// point per body. The copy completes before the first iteration, and the
    /// live store is never written.
    ///
    /// The passes run serially, so two calls against the same unchanged live
    /// state produce bit-identical trails. A fresh call always recomputes
    /// from current live state; trails are not resumable.
    ///
    /// Synchronous and blocking for the full duration; large `iterations`
    /// block the caller accordingly.
    pub fn predict(&self, store: &impl BodyStore, iterations: usize, dt: f32) -> TrajectorySet {
        let mut scratch = store.clone_population();

        let mut trails: TrajectorySet = scratch
            .iter()
            .map(|(id, _, _)| (id, Trail::with_capacity(iterations)))
            .collect();

        for _ in 0..iterations {
            update_velocities_serial(&mut scratch, &self.gravity, dt);
            update_positions_serial(&mut scratch, dt);

            let (entities, transforms, _) = scratch.columns();
            for (id, transform) in entities.iter().zip(transforms.iter()) {
                if let Some(trail) = trails.get_mut(id) {
                    trail.push(transform.position);
                }
            }
        }

        trails
    }
}
