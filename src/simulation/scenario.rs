//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `SimulationConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - a populated entity store (`World` with every configured body spawned)
//! - the live force model (`Gravity`) and frame timestep
//! - a configured orbit predictor with its iteration count and timestep
//!
//! The runner steps the bundle's world each frame and invokes the predictor
//! on demand; collaborators reach individual bodies through the store's
//! identity lookups.

use crate::configuration::config::{BodyConfig, SimulationConfig};
use crate::simulation::components::{Physics2d, Transform2d};
use crate::simulation::gravity::{Gravity, DEFAULT_G, DEFAULT_MIN_DISTANCE_FOR_ACCELERATION,
                                 PREDICTION_G};
use crate::simulation::predictor::OrbitPredictor;
use crate::store::World;

/// Predictor iteration count used when the scenario omits a `prediction` block
const DEFAULT_PREDICTION_ITERATIONS: usize = 120;

/// Fully-initialized runtime scenario
///
/// This is the main "runtime bundle" constructed from a [`SimulationConfig`]:
/// it contains the populated store, the live force model, the frame timestep,
/// and the orbit predictor with its tuning.
pub struct Scenario {
    pub world: World,
    pub gravity: Gravity,
    pub dt: f32,
    pub predictor: OrbitPredictor,
    pub prediction_iterations: usize,
    pub prediction_dt: f32,
}

impl Scenario {
    pub fn build_scenario(cfg: SimulationConfig) -> Self {
        // Bodies: map `BodyConfig` -> spawned (Transform2d, Physics2d) pairs
        let mut world = World::new();
        for bc in &cfg.bodies {
            let (transform, body) = build_body(bc);
            world.spawn(transform, body);
        }

        // Live force model from PhysicsConfig, falling back to engine defaults
        let p_cfg = &cfg.physics;
        let gravity = Gravity::new(
            p_cfg.g_constant.unwrap_or(DEFAULT_G),
            p_cfg
                .min_distance_for_acceleration
                .unwrap_or(DEFAULT_MIN_DISTANCE_FOR_ACCELERATION),
        );

        // Predictor: visualization-tuned force law, iteration count and
        // timestep from the optional prediction block
        let (predictor, prediction_iterations, prediction_dt) = match &cfg.prediction {
            Some(pred) => (
                OrbitPredictor::new(Gravity::prediction_tuned(
                    pred.g_constant.unwrap_or(PREDICTION_G),
                )),
                pred.iterations,
                pred.dt,
            ),
            None => (
                OrbitPredictor::default(),
                DEFAULT_PREDICTION_ITERATIONS,
                p_cfg.dt,
            ),
        };

        Self {
            world,
            gravity,
            dt: p_cfg.dt,
            predictor,
            prediction_iterations,
            prediction_dt,
        }
    }
}

fn build_body(bc: &BodyConfig) -> (Transform2d, Physics2d) {
    let transform = Transform2d::new(bc.position[0], bc.position[1]);

    let mut body = Physics2d::new(bc.velocity[0], bc.velocity[1], bc.mass);
    if let Some(max_speed) = bc.max_speed {
        body.set_max_speed(max_speed);
    }
    if let Some(limit) = bc.limit_speed {
        body.set_limit_enabled(limit);
    }

    (transform, body)
}
