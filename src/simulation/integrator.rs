//! Two-phase frame integration for the N-body population
//!
//! Each simulated frame is:
//! 1. velocity pass — every body accumulates gravitational acceleration from
//!    every other body (full O(n²), no Newton's-third-law halving)
//! 2. position pass — every body advances by its updated velocity
//!    (semi-implicit Euler)
//!
//! The velocity pass completes for the whole population before the position
//! pass starts; `step` enforces that barrier by sequencing the two blocking
//! passes.
//!
//! Parallel and serial variants of both passes are provided. The parallel
//! forms are the per-frame workhorses; the serial forms are bit-reproducible
//! and drive the orbit predictor.

use nalgebra::{Point2, Vector2};
use rayon::prelude::*;

use super::gravity::Gravity;
use crate::store::BodyStore;

// Below this inner-loop length the rayon splitter is told not to bother
// subdividing further.
const INNER_CHUNK: usize = 64;

/// Immutable per-body snapshot read by the velocity pass
/// Taken once up front so every pair sees pre-step positions
#[derive(Clone, Copy)]
struct Source {
    position: Point2<f32>,
    mass: f32,
}

fn snapshot_sources(store: &impl BodyStore) -> Vec<Source> {
    let (_, transforms, bodies) = store.columns();
    transforms
        .iter()
        .zip(bodies.iter())
        .map(|(transform, body)| Source {
            position: transform.position,
            mass: body.mass(),
        })
        .collect()
}

/// Velocity pass: accumulate gravitational delta-velocity into every body
///
/// For each body A the contributions of all B ≠ A are summed raw (no
/// intermediate speed clamp) and applied with a single clamped add, so the
/// limit is enforced exactly once per body per pass.
///
/// The outer loop is parallel across bodies; each unit of work writes exactly
/// one body's velocity. The inner loop is parallelized with thread-local
/// partial sums reduced once per body, so no addition into A is ever
/// contended. Summation order across B is not fixed; bit-exact results across
/// thread counts are not guaranteed.
pub fn update_velocities(store: &mut impl BodyStore, gravity: &Gravity, dt: f32) {
    let sources = snapshot_sources(store);
    if sources.is_empty() {
        return;
    }

    let (_, _, bodies) = store.columns_mut();

    bodies.par_iter_mut().enumerate().for_each(|(i, body)| {
        let target = sources[i].position;

        // Accumulate phase
        let delta: Vector2<f32> = sources
            .par_iter()
            .enumerate()
            .with_min_len(INNER_CHUNK)
            .filter(|&(j, _)| j != i)
            .fold(
                || Vector2::zeros(),
                |sum, (_, source)| {
                    sum + gravity.acceleration(target, source.position, source.mass) * dt
                },
            )
            .reduce(|| Vector2::zeros(), |a, b| a + b);

        // Finalize phase: one write, one clamp
        body.add_velocity(delta);
    });
}

/// Position pass: advance every body by `velocity * dt`
///
/// Reads the velocities finalized by [`update_velocities`] this frame
/// (semi-implicit Euler). Each unit of work writes only its own entity's
/// position, so the loop is parallel with no shared-write hazard.
pub fn update_positions(store: &mut impl BodyStore, dt: f32) {
    let (_, transforms, bodies) = store.columns_mut();

    transforms
        .par_iter_mut()
        .zip(bodies.par_iter())
        .for_each(|(transform, body)| {
            transform.translate(body.velocity() * dt);
        });
}

/// Advance the population by one frame: full velocity pass, then full
/// position pass. Both passes block until complete, so the velocity pass is
/// externally visible in its entirety before any position is read.
pub fn step(store: &mut impl BodyStore, gravity: &Gravity, dt: f32) {
    update_velocities(store, gravity, dt);
    update_positions(store, dt);
}

/// Serial velocity pass: same contract as [`update_velocities`], fixed
/// summation order. Bit-reproducible for identical inputs; used by the orbit
/// predictor.
pub fn update_velocities_serial(store: &mut impl BodyStore, gravity: &Gravity, dt: f32) {
    let sources = snapshot_sources(store);
    if sources.is_empty() {
        return;
    }

    let (_, _, bodies) = store.columns_mut();

    for (i, body) in bodies.iter_mut().enumerate() {
        let target = sources[i].position;

        let mut delta = Vector2::zeros();
        for (j, source) in sources.iter().enumerate() {
            if j == i {
                continue;
            }
            delta += gravity.acceleration(target, source.position, source.mass) * dt;
        }

        body.add_velocity(delta);
    }
}

/// Serial position pass: same contract as [`update_positions`]
pub fn update_positions_serial(store: &mut impl BodyStore, dt: f32) {
    let (_, transforms, bodies) = store.columns_mut();

    for (transform, body) in transforms.iter_mut().zip(bodies.iter()) {
        transform.translate(body.velocity() * dt);
    }
}
