//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`PhysicsConfig`]    – force-law constants and the frame timestep
//! - [`PredictionConfig`] – orbit-predictor tuning (optional)
//! - [`BodyConfig`]       – initial state for each body
//! - [`SimulationConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! physics:
//!   g_constant: 6.6742e-11              # gravitational constant
//!   min_distance_for_acceleration: 2.5  # softening threshold (squared distance)
//!   dt: 1.0                             # frame timestep
//!
//! prediction:
//!   g_constant: 1.0e-4                  # exaggerated constant for trails
//!   iterations: 120                     # points per predicted trail
//!   dt: 0.5                             # prediction timestep
//!
//! bodies:
//!   - position: [ 0.0, 0.0 ]
//!     velocity: [ 0.0, 0.0 ]
//!     mass: 1.0e15
//!   - position: [ 100.0, 0.0 ]
//!     velocity: [ 0.0, -20.0 ]
//!     mass: 1.0
//!     max_speed: 100.0
//!     limit_speed: true
//! ```
//!
//! The engine maps this configuration into its runtime scenario bundle
//! (see [`crate::simulation::scenario::Scenario`]).

use serde::Deserialize;

/// Force-law constants and the live frame timestep
#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
    pub g_constant: Option<f32>, // defaults to 6.6742e-11
    pub min_distance_for_acceleration: Option<f32>, // defaults to 2.5 (squared distance)
    pub dt: f32, // frame timestep in simulation time units
}

/// Orbit-predictor tuning
/// The predictor's force law is independent of the live one: an exaggerated
/// constant with no softening floor, purely a visualization knob
#[derive(Deserialize, Debug, Clone)]
pub struct PredictionConfig {
    pub g_constant: Option<f32>, // defaults to the exaggerated prediction constant
    pub iterations: usize,       // points recorded per body
    pub dt: f32,                 // prediction timestep, independent of the frame dt
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub position: Vec<f32>,        // initial position [x, y]
    pub velocity: Vec<f32>,        // initial velocity [vx, vy]
    pub mass: f32,                 // mass, floored at the engine's epsilon on load
    pub max_speed: Option<f32>,    // speed ceiling, defaults to 100
    pub limit_speed: Option<bool>, // whether the ceiling is enforced, defaults to off
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,               // force law + frame timestep
    pub prediction: Option<PredictionConfig>, // predictor tuning, optional
    pub bodies: Vec<BodyConfig>,              // initial population
}
