//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! soup scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – population size and viewport dimensions
//! - [`ParametersConfig`] – spawn ranges and the deterministic seed
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   population: 15          # number of creatures in the soup
//!   width: 1280.0           # viewport width
//!   height: 720.0           # viewport height
//!
//! parameters:
//!   seed: 42                # deterministic seed
//!   particles_min: 4        # particles per creature
//!   particles_max: 9
//!   mass_min: 0.4           # particle mass range
//!   mass_max: 1.6
//!   radius_min: 2.0         # particle radius range
//!   radius_max: 10.0
//!   anchor_boost: 15.0      # extra radius for the first particle
//!   rest_max: 20.0          # mandatory spring rest length cap
//!   stiffness_min: 0.01
//!   stiffness_max: 0.11
//!   spring_damping_min: 0.01
//!   spring_damping_max: 0.11
//!   long_rest_max: 180.0    # optional long-range spring rest length cap
//!   second_spring_chance: 0.5
//!   default_stiffness: 0.1  # constants for the optional spring
//!   default_damping: 0.01
//!   wander_min: 0.25        # heading perturbation range
//!   wander_max: 2.75
//!   speed_min: 0.25         # propulsion force range
//!   speed_max: 1.25
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation; `Scenario::build_scenario` validates the ranges.

use serde::Deserialize;

/// High-level engine configuration
/// Controls the structure of the simulation
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub population: usize, // fixed number of creatures
    pub width: f64,        // viewport width, used for spawning and culling
    pub height: f64,       // viewport height, used for spawning and culling
}

/// Spawn ranges and the deterministic seed for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub seed: u64,                 // deterministic seed to make runs reproducable
    pub particles_min: usize,      // particles per creature (inclusive range)
    pub particles_max: usize,
    pub mass_min: f64,             // particle mass (must be positive)
    pub mass_max: f64,
    pub radius_min: f64,           // particle radius (must be positive)
    pub radius_max: f64,
    pub anchor_boost: f64,         // extra radius for the anchor particle
    pub rest_max: f64,             // mandatory spring rest length in [0, rest_max]
    pub stiffness_min: f64,        // mandatory spring stiffness range
    pub stiffness_max: f64,
    pub spring_damping_min: f64,   // mandatory spring damping range
    pub spring_damping_max: f64,
    pub long_rest_max: f64,        // optional spring rest length in [0, long_rest_max]
    pub second_spring_chance: f64, // probability of a second spring per particle
    pub default_stiffness: f64,    // optional spring stiffness
    pub default_damping: f64,      // optional spring damping
    pub wander_min: f64,           // per-tick heading perturbation bound range
    pub wander_max: f64,
    pub speed_min: f64,            // propulsion force range
    pub speed_max: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // population and viewport
    pub parameters: ParametersConfig, // spawn ranges and seed
}
