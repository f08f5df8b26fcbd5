//! Build a fully-initialized simulation scenario from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - spawn parameters (`Parameters`)
//! - the seeded RNG driving all randomized construction
//! - the initial soup population
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! stepping and visualization systems.
//!
//! Spawn ranges come from configuration rather than being internally
//! generated, so they are validated here; the simulation core itself assumes
//! well-formed values.

use anyhow::{ensure, Result};
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Creature, Soup};

/// Bevy resource representing a fully-initialized soup scenario.
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub soup: Soup,
    pub rng: StdRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        ensure!(e_cfg.population > 0, "population must be at least 1");
        ensure!(
            e_cfg.width > 0.0 && e_cfg.height > 0.0,
            "viewport dimensions must be positive"
        );
        let engine = Engine {
            population: e_cfg.population,
            width: e_cfg.width,
            height: e_cfg.height,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        ensure!(
            p_cfg.particles_min >= 2 && p_cfg.particles_min <= p_cfg.particles_max,
            "particle count range must satisfy 2 <= min <= max"
        );
        ensure!(
            p_cfg.mass_min > 0.0 && p_cfg.mass_min <= p_cfg.mass_max,
            "mass range must be positive and ordered"
        );
        ensure!(
            p_cfg.radius_min > 0.0 && p_cfg.radius_min <= p_cfg.radius_max,
            "radius range must be positive and ordered"
        );
        ensure!(p_cfg.anchor_boost >= 0.0, "anchor_boost must be non-negative");
        ensure!(
            p_cfg.rest_max >= 0.0 && p_cfg.long_rest_max >= 0.0,
            "spring rest lengths must be non-negative"
        );
        ensure!(
            p_cfg.stiffness_min <= p_cfg.stiffness_max,
            "stiffness range must be ordered"
        );
        ensure!(
            p_cfg.spring_damping_min <= p_cfg.spring_damping_max,
            "spring damping range must be ordered"
        );
        ensure!(
            (0.0..=1.0).contains(&p_cfg.second_spring_chance),
            "second_spring_chance must be a probability in [0, 1]"
        );
        ensure!(
            p_cfg.wander_min >= 0.0 && p_cfg.wander_min <= p_cfg.wander_max,
            "wander range must be non-negative and ordered"
        );
        ensure!(
            p_cfg.speed_min <= p_cfg.speed_max,
            "speed range must be ordered"
        );
        let parameters = Parameters {
            seed: p_cfg.seed,
            particles_min: p_cfg.particles_min,
            particles_max: p_cfg.particles_max,
            mass_min: p_cfg.mass_min,
            mass_max: p_cfg.mass_max,
            radius_min: p_cfg.radius_min,
            radius_max: p_cfg.radius_max,
            anchor_boost: p_cfg.anchor_boost,
            rest_max: p_cfg.rest_max,
            stiffness_min: p_cfg.stiffness_min,
            stiffness_max: p_cfg.stiffness_max,
            spring_damping_min: p_cfg.spring_damping_min,
            spring_damping_max: p_cfg.spring_damping_max,
            long_rest_max: p_cfg.long_rest_max,
            second_spring_chance: p_cfg.second_spring_chance,
            default_stiffness: p_cfg.default_stiffness,
            default_damping: p_cfg.default_damping,
            wander_min: p_cfg.wander_min,
            wander_max: p_cfg.wander_max,
            speed_min: p_cfg.speed_min,
            speed_max: p_cfg.speed_max,
        };

        // Seed the RNG, then spawn the initial population at random origins
        let mut rng = StdRng::seed_from_u64(parameters.seed);
        let creatures = (0..engine.population)
            .map(|_| Creature::spawn(&engine, &parameters, &mut rng))
            .collect();

        Ok(Self {
            engine,
            parameters,
            soup: Soup::new(creatures),
            rng,
        })
    }
}
