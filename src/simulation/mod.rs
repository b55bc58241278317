pub mod components;
pub mod gravity;
pub mod integrator;
pub mod predictor;
pub mod scenario;
