//! Pairwise gravitational force model
//!
//! Computes the acceleration one body induces on another under Newtonian
//! gravity, with a minimum-squared-distance guard that returns zero
//! acceleration for near-coincident bodies instead of blowing up.

use nalgebra::{Point2, Vector2};

/// Gravitational constant in simulation units
pub const DEFAULT_G: f32 = 6.6742e-11;

/// Default softening threshold, in squared-distance units
/// Below this separation the force model returns zero acceleration
pub const DEFAULT_MIN_DISTANCE_FOR_ACCELERATION: f32 = 2.5;

/// Exaggerated constant used by the orbit predictor's visualization-tuned
/// force law (see [`Gravity::prediction_tuned`])
pub const PREDICTION_G: f32 = 1.0e-4;

/// Newtonian gravity between point masses, with softening
///
/// Both knobs are runtime-mutable: collaborators (UI, scenario loading) may
/// retune the constant or the softening threshold mid-session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    g_constant: f32,
    min_distance_for_acceleration: f32, // squared-distance units
}

impl Default for Gravity {
    fn default() -> Self {
        Self {
            g_constant: DEFAULT_G,
            min_distance_for_acceleration: DEFAULT_MIN_DISTANCE_FOR_ACCELERATION,
        }
    }
}

impl Gravity {
    pub fn new(g_constant: f32, min_distance_for_acceleration: f32) -> Self {
        Self {
            g_constant,
            min_distance_for_acceleration,
        }
    }

    /// Visualization-tuned variant for orbit prediction: exaggerated constant,
    /// softening floor omitted. A tuning knob, not a physical model.
    pub fn prediction_tuned(g_constant: f32) -> Self {
        Self {
            g_constant,
            min_distance_for_acceleration: 0.0,
        }
    }

    pub fn g_constant(&self) -> f32 {
        self.g_constant
    }

    pub fn set_g_constant(&mut self, g: f32) {
        self.g_constant = g;
    }

    pub fn min_distance_for_acceleration(&self) -> f32 {
        self.min_distance_for_acceleration
    }

    pub fn set_min_distance_for_acceleration(&mut self, min_distance: f32) {
        self.min_distance_for_acceleration = min_distance;
    }

    /// Acceleration applied to the body at `target` by a body of mass
    /// `source_mass` at `source`
    ///
    /// Returns the zero vector when the squared separation is below the
    /// softening threshold. The result is independent of the target's own
    /// mass: in `F = G * m_t * m_s / r^2` the target mass cancels against
    /// `a = F / m_t`, so only the source mass enters.
    ///
    /// Pure and total; no error conditions.
    pub fn acceleration(
        &self,
        target: Point2<f32>,
        source: Point2<f32>,
        source_mass: f32,
    ) -> Vector2<f32> {
        let displacement = source - target;
        let distance_sqr = displacement.norm_squared();

        if distance_sqr < self.min_distance_for_acceleration {
            return Vector2::zeros();
        }

        let direction = displacement.normalize();
        direction * self.g_constant * source_mass / distance_sqr
    }
}
