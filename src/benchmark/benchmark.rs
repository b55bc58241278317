use std::time::Instant;

use crate::simulation::components::{Physics2d, Transform2d};
use crate::simulation::gravity::Gravity;
use crate::simulation::integrator::{step, update_velocities};
use crate::simulation::predictor::OrbitPredictor;
use crate::store::World;

/// Build a deterministic N-body world, no rand needed
fn build_world(n: usize) -> World {
    let mut world = World::new();

    for i in 0..n {
        let i_f = i as f32;
        let transform = Transform2d::new((i_f * 0.37).sin() * 500.0, (i_f * 0.13).cos() * 500.0);
        let body = Physics2d::new(0.0, 0.0, 1.0e12);
        world.spawn(transform, body);
    }

    world
}

pub fn bench_velocity_pass() {
    // Different population sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let gravity = Gravity::default();

    for n in ns {
        let mut world = build_world(n);

        // Warm up
        update_velocities(&mut world, &gravity, 0.016);

        let t0 = Instant::now();
        update_velocities(&mut world, &gravity, 0.016);
        let dt_pass = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, velocity pass = {:8.6} s", dt_pass);
    }
}

pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 4; // frames per measurement (tune as needed)
    let gravity = Gravity::default();

    for n in ns {
        let mut world = build_world(n);

        // Warm up
        step(&mut world, &gravity, 0.016);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut world, &gravity, 0.016);
        }
        let per_frame = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, frame = {:8.6} s", per_frame);
    }
}

pub fn bench_predict() {
    let ns = [200, 400, 800, 1600];
    let iterations = 60;
    let predictor = OrbitPredictor::default();

    for n in ns {
        let world = build_world(n);

        // Warm up
        predictor.predict(&world, 1, 0.016);

        let t0 = Instant::now();
        let trails = predictor.predict(&world, iterations, 0.016);
        let dt_predict = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, predict ({} iters, {} trails) = {:8.6} s",
            iterations,
            trails.len(),
            dt_predict
        );
    }
}
