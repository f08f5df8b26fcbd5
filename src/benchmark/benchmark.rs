use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::engine::Engine;
use crate::simulation::integrator::step_soup;
use crate::simulation::params::Parameters;
use crate::simulation::render::NullCanvas;
use crate::simulation::states::{Creature, Soup};

/// Helper to build spawn parameters matching the default scenario
fn make_params() -> Parameters {
    Parameters {
        seed: 42,
        particles_min: 4,
        particles_max: 9,
        mass_min: 0.4,
        mass_max: 1.6,
        radius_min: 2.0,
        radius_max: 10.0,
        anchor_boost: 15.0,
        rest_max: 20.0,
        stiffness_min: 0.01,
        stiffness_max: 0.11,
        spring_damping_min: 0.01,
        spring_damping_max: 0.11,
        long_rest_max: 180.0,
        second_spring_chance: 0.5,
        default_stiffness: 0.1,
        default_damping: 0.01,
        wander_min: 0.25,
        wander_max: 2.75,
        speed_min: 0.25,
        speed_max: 1.25,
    }
}

/// Helper to build an engine with `population` creatures on a fixed viewport
fn make_engine(population: usize) -> Engine {
    Engine {
        population,
        width: 1280.0,
        height: 720.0,
    }
}

/// Helper to build a seeded soup of `population` creatures
fn make_soup(engine: &Engine, params: &Parameters, rng: &mut StdRng) -> Soup {
    let creatures = (0..engine.population)
        .map(|_| Creature::spawn(engine, params, rng))
        .collect();
    Soup::new(creatures)
}

/// Time update phases for a range of population sizes
pub fn bench_step() {
    let populations = [15, 60, 240, 960, 3840];
    let steps = 200; // update/draw pairs per population

    for population in populations {
        let params = make_params();
        let engine = make_engine(population);
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut soup = make_soup(&engine, &params, &mut rng);
        let mut canvas = NullCanvas;

        // Warm up one full update/draw pair
        step_soup(&mut soup, &engine, &params, &mut rng, &mut canvas);
        step_soup(&mut soup, &engine, &params, &mut rng, &mut canvas);

        let t0 = Instant::now();
        for _ in 0..steps {
            step_soup(&mut soup, &engine, &params, &mut rng, &mut canvas);
            step_soup(&mut soup, &engine, &params, &mut rng, &mut canvas);
        }
        let per_pair = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "population = {population:5}, update+draw = {:10.8} s",
            per_pair
        );
    }
}

/// Benchmark the stepping loop over a population curve
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("population,ms_per_pair");

    for population in (15..=960).step_by(15) {
        // Small populations: more repetitions to smooth noise
        let steps = if population <= 240 { 400 } else { 100 };

        let params = make_params();
        let engine = make_engine(population);
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut soup = make_soup(&engine, &params, &mut rng);
        let mut canvas = NullCanvas;

        let t0 = Instant::now();
        for _ in 0..steps {
            step_soup(&mut soup, &engine, &params, &mut rng, &mut canvas);
            step_soup(&mut soup, &engine, &params, &mut rng, &mut canvas);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", population, ms);
    }
}
