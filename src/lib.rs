pub mod benchmark;
pub mod configuration;
pub mod simulation;
pub mod store;

pub use simulation::components::{limit_length, Physics2d, Transform2d, DEFAULT_MAX_SPEED, MIN_MASS};
pub use simulation::gravity::{Gravity, DEFAULT_G, DEFAULT_MIN_DISTANCE_FOR_ACCELERATION, PREDICTION_G};
pub use simulation::integrator::{
    step, update_positions, update_positions_serial, update_velocities, update_velocities_serial,
};
pub use simulation::predictor::{OrbitPredictor, Trail, TrajectorySet};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, PhysicsConfig, PredictionConfig, SimulationConfig};

pub use store::{BodyStore, EntityId, World};

pub use benchmark::benchmark::{bench_predict, bench_step, bench_velocity_pass};
