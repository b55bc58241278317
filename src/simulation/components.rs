//! Per-entity simulation components
//!
//! Defines the two components every simulated body carries:
//! - `Transform2d` — spatial state (2D position)
//! - `Physics2d`   — kinematic state (velocity, mass, speed-limit policy)
//!
//! Plus the shared `limit_length` clamping utility used by the speed limiter.

use nalgebra::{Point2, Vector2};

/// Floor applied to every mass write
/// Keeps `inverse_mass = 1 / mass` finite without surfacing an error
pub const MIN_MASS: f32 = f32::EPSILON;

/// Default speed ceiling for a freshly-constructed body
pub const DEFAULT_MAX_SPEED: f32 = 100.0;

/// Clamp `v` to at most `max_length`, preserving direction
/// Returns `v` unchanged when it is already within the limit
pub fn limit_length(v: Vector2<f32>, max_length: f32) -> Vector2<f32> {
    let length = v.norm();

    if length > max_length {
        return v.normalize() * max_length;
    }

    v
}

/// Spatial component: a body's 2D position
///
/// Owned by the entity store; written by the position pass each frame and by
/// reset/teleport collaborators outside the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2d {
    pub position: Point2<f32>,
}

impl Default for Transform2d {
    fn default() -> Self {
        Self {
            position: Point2::origin(),
        }
    }
}

impl Transform2d {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }

    /// Move the position by `delta`
    pub fn translate(&mut self, delta: Vector2<f32>) {
        self.position += delta;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point2::new(x, y);
    }
}

/// Kinematic component: velocity, mass, and the speed-limit policy
///
/// Mass is floored at [`MIN_MASS`] on every write and the inverse mass is
/// cached alongside it, so `inverse_mass` is always finite and consistent.
///
/// Velocity mutators come in two flavors:
/// - clamped (`set_velocity`, `add_velocity`, `subtract_velocity`) — apply the
///   speed limit immediately after the write (finalize phase)
/// - raw (`set_velocity_raw`, `add_velocity_raw`) — skip the limit, used while
///   summing per-frame contributions (accumulate phase)
///
/// The limit itself is a no-op until `limit_enabled` is switched on; that
/// switch is configuration, not something toggled per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics2d {
    velocity: Vector2<f32>,
    mass: f32,
    inverse_mass: f32, // cached 1/mass, re-derived on every mass write
    max_speed: f32,
    limit_enabled: bool,
}

impl Default for Physics2d {
    fn default() -> Self {
        Self {
            velocity: Vector2::zeros(),
            mass: 1.0,
            inverse_mass: 1.0,
            max_speed: DEFAULT_MAX_SPEED,
            limit_enabled: false,
        }
    }
}

impl Physics2d {
    /// Body with explicit velocity components and mass
    /// Mass is floored at [`MIN_MASS`]
    pub fn new(vx: f32, vy: f32, mass: f32) -> Self {
        let mut body = Self {
            velocity: Vector2::new(vx, vy),
            ..Self::default()
        };
        body.set_mass(mass);
        body
    }

    pub fn velocity(&self) -> Vector2<f32> {
        self.velocity
    }

    /// Current speed `|velocity|`
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn limit_enabled(&self) -> bool {
        self.limit_enabled
    }

    /// Replace the velocity, then apply the speed limit
    pub fn set_velocity(&mut self, velocity: Vector2<f32>) {
        self.velocity = velocity;
        self.clamp_speed();
    }

    /// Replace the velocity without applying the speed limit
    pub fn set_velocity_raw(&mut self, velocity: Vector2<f32>) {
        self.velocity = velocity;
    }

    /// Add `delta` to the velocity, then apply the speed limit
    pub fn add_velocity(&mut self, delta: Vector2<f32>) {
        self.velocity += delta;
        self.clamp_speed();
    }

    /// Add `delta` to the velocity without applying the speed limit
    /// Intermediate magnitudes above `max_speed` are permitted here; the
    /// accumulation that owns this body clamps exactly once when it finishes
    pub fn add_velocity_raw(&mut self, delta: Vector2<f32>) {
        self.velocity += delta;
    }

    /// Subtract `delta` from the velocity, then apply the speed limit
    pub fn subtract_velocity(&mut self, delta: Vector2<f32>) {
        self.velocity -= delta;
        self.clamp_speed();
    }

    /// Subtract `delta` from the velocity without applying the speed limit
    pub fn subtract_velocity_raw(&mut self, delta: Vector2<f32>) {
        self.velocity -= delta;
    }

    /// Set the mass, floored at [`MIN_MASS`], and re-derive the inverse mass
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass.max(MIN_MASS);
        self.inverse_mass = 1.0 / self.mass;
    }

    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed;
    }

    pub fn set_limit_enabled(&mut self, enabled: bool) {
        self.limit_enabled = enabled;
    }

    /// Finalize phase: clamp the velocity to `max_speed`
    /// No-op while `limit_enabled` is false
    pub fn clamp_speed(&mut self) {
        if self.limit_enabled {
            self.velocity = limit_length(self.velocity, self.max_speed);
        }
    }
}
