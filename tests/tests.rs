use nbody2d::simulation::components::{Physics2d, Transform2d, MIN_MASS};
use nbody2d::simulation::gravity::Gravity;
use nbody2d::simulation::integrator::{step, update_positions, update_velocities};
use nbody2d::simulation::predictor::OrbitPredictor;
use nbody2d::store::{BodyStore, EntityId, World};

use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

/// Build a two-body world separated by `r` along the x-axis, both at rest
pub fn two_body_world(r: f32, m1: f32, m2: f32) -> (World, EntityId, EntityId) {
    let mut world = World::new();
    let a = world.spawn(Transform2d::new(0.0, 0.0), Physics2d::new(0.0, 0.0, m1));
    let b = world.spawn(Transform2d::new(r, 0.0), Physics2d::new(0.0, 0.0, m2));
    (world, a, b)
}

/// Force law from the reference scenario: G = 6.6742e-11, threshold 2.5
pub fn test_gravity() -> Gravity {
    Gravity::new(6.6742e-11, 2.5)
}

// ==================================================================================
// Component tests
// ==================================================================================

#[test]
fn mass_floored_at_epsilon() {
    let mut body = Physics2d::default();

    for submitted in [0.0_f32, -1.0, -5.0e20] {
        body.set_mass(submitted);
        assert_eq!(body.mass(), MIN_MASS);
        assert_eq!(body.inverse_mass(), 1.0 / MIN_MASS);
    }

    // Constructor goes through the same floor
    let constructed = Physics2d::new(0.0, 0.0, -3.0);
    assert_eq!(constructed.mass(), MIN_MASS);
}

#[test]
fn valid_mass_keeps_inverse_consistent() {
    let mut body = Physics2d::default();
    body.set_mass(250.0);

    assert_eq!(body.mass(), 250.0);
    assert_relative_eq!(body.inverse_mass(), 1.0 / 250.0, max_relative = 1e-6);
}

#[test]
fn clamp_preserves_direction() {
    // |v| = 5, ceiling 4 -> magnitude exactly 4, direction unchanged
    let mut body = Physics2d::new(0.0, 0.0, 5.0);
    body.set_max_speed(4.0);
    body.set_limit_enabled(true);

    body.set_velocity(Vector2::new(3.0, 4.0));

    assert_relative_eq!(body.speed(), 4.0, max_relative = 1e-6);
    assert_relative_eq!(body.velocity().x, 2.4, max_relative = 1e-5);
    assert_relative_eq!(body.velocity().y, 3.2, max_relative = 1e-5);
}

#[test]
fn raw_mutation_defers_clamp_to_finalize() {
    let mut body = Physics2d::default();
    body.set_max_speed(4.0);
    body.set_limit_enabled(true);

    // Accumulate phase: over the limit transiently
    body.add_velocity_raw(Vector2::new(3.0, 4.0));
    assert_relative_eq!(body.speed(), 5.0, max_relative = 1e-6);

    // Finalize phase: clamped once
    body.clamp_speed();
    assert_relative_eq!(body.speed(), 4.0, max_relative = 1e-6);
}

#[test]
fn clamp_disabled_by_default() {
    let mut body = Physics2d::default();
    body.set_velocity(Vector2::new(300.0, 400.0));

    assert_relative_eq!(body.speed(), 500.0, max_relative = 1e-6);
}

// ==================================================================================
// Force model tests
// ==================================================================================

#[test]
fn softening_zeroes_acceleration_both_directions() {
    let gravity = test_gravity();
    let p1 = Point2::new(0.0, 0.0);
    let p2 = Point2::new(1.0, 1.0); // distance^2 = 2 < 2.5

    assert_eq!(gravity.acceleration(p1, p2, 1.0e20), Vector2::zeros());
    assert_eq!(gravity.acceleration(p2, p1, 1.0e20), Vector2::zeros());
}

#[test]
fn coincident_bodies_produce_no_force() {
    let gravity = test_gravity();
    let p = Point2::new(3.0, -7.0);

    assert_eq!(gravity.acceleration(p, p, 1.0e15), Vector2::zeros());
}

#[test]
fn two_body_acceleration_magnitude() {
    let gravity = test_gravity();
    let target = Point2::new(100.0, 0.0);
    let source = Point2::new(0.0, 0.0);

    // a = G * m_source / r^2 = 6.6742e-11 * 1000 / 10000
    let a = gravity.acceleration(target, source, 1000.0);

    assert_relative_eq!(a.norm(), 6.6742e-12, max_relative = 1e-5);
    assert!(a.x < 0.0, "acceleration must point toward the source");
    assert_eq!(a.y, 0.0);
}

#[test]
fn acceleration_independent_of_target_mass() {
    // Same geometry, target masses five orders of magnitude apart: the
    // velocity delta applied to the target must be identical
    let gravity = test_gravity();
    let dt = 1.0;

    let (mut light, a_light, _) = two_body_world(100.0, 1.0, 1000.0);
    let (mut heavy, a_heavy, _) = two_body_world(100.0, 1.0e5, 1000.0);

    update_velocities(&mut light, &gravity, dt);
    update_velocities(&mut heavy, &gravity, dt);

    let (_, body_light) = light.get(a_light).unwrap();
    let (_, body_heavy) = heavy.get(a_heavy).unwrap();
    assert_eq!(body_light.velocity(), body_heavy.velocity());
}

#[test]
fn force_constants_mutable_at_runtime() {
    let mut gravity = test_gravity();
    let target = Point2::new(0.0, 0.0);
    let source = Point2::new(1.0, 1.0); // below the default threshold

    assert_eq!(gravity.acceleration(target, source, 1.0), Vector2::zeros());

    gravity.set_min_distance_for_acceleration(0.5);
    gravity.set_g_constant(1.0);
    let a = gravity.acceleration(target, source, 1.0);

    // r^2 = 2, |a| = 1 * 1 / 2
    assert_relative_eq!(a.norm(), 0.5, max_relative = 1e-5);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn isolated_body_velocity_unchanged_position_advanced() {
    let mut world = World::new();
    let id = world.spawn(Transform2d::new(1.0, 2.0), Physics2d::new(3.0, 4.0, 10.0));
    let gravity = test_gravity();

    update_velocities(&mut world, &gravity, 0.5);
    let (_, body) = world.get(id).unwrap();
    assert_eq!(body.velocity(), Vector2::new(3.0, 4.0));

    update_positions(&mut world, 0.5);
    let (transform, _) = world.get(id).unwrap();
    assert_relative_eq!(transform.position.x, 2.5, max_relative = 1e-6);
    assert_relative_eq!(transform.position.y, 4.0, max_relative = 1e-6);
}

#[test]
fn two_body_reference_step() {
    // Masses 1000 and 1 at (0,0) and (100,0), dt = 1: body 2 picks up
    // ~6.6742e-12 m/s toward body 1; its position barely moves
    let (mut world, a, b) = two_body_world(100.0, 1000.0, 1.0);
    let gravity = test_gravity();

    step(&mut world, &gravity, 1.0);

    let (transform_b, body_b) = world.get(b).unwrap();
    assert_relative_eq!(body_b.velocity().x, -6.6742e-12, max_relative = 1e-5);
    assert_eq!(body_b.velocity().y, 0.0);
    assert_relative_eq!(transform_b.position.x, 100.0, max_relative = 1e-6);

    // The mutual pull on body 1 is a thousand times weaker, pointing +x
    let (_, body_a) = world.get(a).unwrap();
    assert_relative_eq!(body_a.velocity().x, 6.6742e-15, max_relative = 1e-5);
}

#[test]
fn velocity_clamped_once_after_pass() {
    // Strong force law so raw accumulation far exceeds the ceiling
    let mut world = World::new();
    let mut limited = Physics2d::new(0.0, 0.0, 1.0e6);
    limited.set_max_speed(5.0);
    limited.set_limit_enabled(true);

    let id = world.spawn(Transform2d::new(0.0, 0.0), limited);
    world.spawn(Transform2d::new(10.0, 0.0), Physics2d::new(0.0, 0.0, 1.0e6));
    world.spawn(Transform2d::new(0.0, 10.0), Physics2d::new(0.0, 0.0, 1.0e6));

    let gravity = Gravity::new(1.0, 2.5);
    update_velocities(&mut world, &gravity, 1.0);

    let (_, body) = world.get(id).unwrap();
    assert!(
        body.speed() <= 5.0 + 1e-3,
        "speed {} exceeds the ceiling",
        body.speed()
    );
}

#[test]
fn empty_population_is_a_noop() {
    let mut world = World::new();
    let gravity = test_gravity();

    step(&mut world, &gravity, 1.0);
    assert!(world.is_empty());
}

// ==================================================================================
// Orbit predictor tests
// ==================================================================================

#[test]
fn predictor_trail_shape() {
    let (world, a, b) = two_body_world(100.0, 1000.0, 1.0);
    let predictor = OrbitPredictor::default();

    let trails = predictor.predict(&world, 10, 1.0);

    assert_eq!(trails.len(), 2);
    assert_eq!(trails[&a].len(), 10);
    assert_eq!(trails[&b].len(), 10);
}

#[test]
fn predictor_is_deterministic_per_call() {
    let (world, _, _) = two_body_world(100.0, 1000.0, 1.0);
    let predictor = OrbitPredictor::new(Gravity::prediction_tuned(1.0));

    let first = predictor.predict(&world, 25, 0.5);
    let second = predictor.predict(&world, 25, 0.5);

    assert_eq!(first, second);
}

#[test]
fn predictor_leaves_live_state_untouched() {
    let (mut world, _, _) = two_body_world(100.0, 1000.0, 1.0);
    // Give the bodies some motion first
    step(&mut world, &test_gravity(), 1.0);

    let before: Vec<(EntityId, Transform2d, Physics2d)> =
        world.iter().map(|(id, t, b)| (id, *t, *b)).collect();

    let predictor = OrbitPredictor::new(Gravity::prediction_tuned(1.0));
    predictor.predict(&world, 50, 1.0);

    let after: Vec<(EntityId, Transform2d, Physics2d)> =
        world.iter().map(|(id, t, b)| (id, *t, *b)).collect();
    assert_eq!(before, after);
}

#[test]
fn predictor_trails_show_cumulative_displacement() {
    let (world, _, b) = two_body_world(100.0, 1000.0, 1.0);
    let predictor = OrbitPredictor::new(Gravity::prediction_tuned(1.0));

    let trails = predictor.predict(&world, 10, 1.0);
    let trail = &trails[&b];
    let start = Point2::new(100.0, 0.0);

    let mut previous = 0.0;
    for point in trail {
        let displacement = (point - start).norm();
        assert!(
            displacement >= previous,
            "displacement shrank: {} < {}",
            displacement,
            previous
        );
        previous = displacement;
    }

    // The attracted body actually moved
    assert!(previous > 0.0);
}

// ==================================================================================
// Store tests
// ==================================================================================

#[test]
fn respawn_reuses_identity_in_place() {
    let mut world = World::new();
    let id = world.spawn(Transform2d::new(1.0, 1.0), Physics2d::new(0.0, 0.0, 5.0));

    world.respawn(id, Transform2d::new(-2.0, 3.0), Physics2d::new(1.0, 0.0, 7.0));

    assert_eq!(world.len(), 1);
    let (transform, body) = world.get(id).unwrap();
    assert_eq!(transform.position, Point2::new(-2.0, 3.0));
    assert_eq!(body.mass(), 7.0);
}

#[test]
fn point_lookup_supports_reset_collaborators() {
    // The "restore the reference body to rest" action: zero velocity,
    // teleport back to the origin point
    let (mut world, a, _) = two_body_world(100.0, 1000.0, 1.0);
    step(&mut world, &test_gravity(), 1.0);

    let (transform, body) = world.get_mut(a).unwrap();
    body.set_velocity(Vector2::zeros());
    transform.set_position(0.0, 0.0);

    let (transform, body) = world.get(a).unwrap();
    assert_eq!(body.velocity(), Vector2::zeros());
    assert_eq!(transform.position, Point2::new(0.0, 0.0));
}

#[test]
fn unknown_identity_yields_none() {
    let world = World::new();
    assert!(world.get(EntityId(3)).is_none());
}

#[test]
fn cloned_population_is_isolated() {
    let (world, a, _) = two_body_world(100.0, 1000.0, 1.0);

    let mut scratch = world.clone_population();
    {
        let (transform, body) = scratch.get_mut(a).unwrap();
        body.set_velocity(Vector2::new(9.0, 9.0));
        transform.set_position(-50.0, -50.0);
    }

    let (transform, body) = world.get(a).unwrap();
    assert_eq!(body.velocity(), Vector2::zeros());
    assert_eq!(transform.position, Point2::new(0.0, 0.0));
}
