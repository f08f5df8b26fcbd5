//! Runtime spawn parameters for the simulation.
//!
//! `Parameters` holds the ranges sampled when creatures are constructed:
//! population topology, particle mass/radius, spring constants, and the
//! wander steering ranges, plus the deterministic seed.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub seed: u64,                  // deterministic seed to make runs reproducible
    pub particles_min: usize,       // min particles per creature
    pub particles_max: usize,       // max particles per creature
    pub mass_min: f64,              // particle mass range
    pub mass_max: f64,
    pub radius_min: f64,            // particle radius range
    pub radius_max: f64,
    pub anchor_boost: f64,          // extra radius range for the anchor particle
    pub rest_max: f64,              // mandatory spring rest length range [0, rest_max]
    pub stiffness_min: f64,         // mandatory spring stiffness range
    pub stiffness_max: f64,
    pub spring_damping_min: f64,    // mandatory spring damping range
    pub spring_damping_max: f64,
    pub long_rest_max: f64,         // optional long-range spring rest length range
    pub second_spring_chance: f64,  // probability of the optional spring per particle
    pub default_stiffness: f64,     // stiffness for the optional spring
    pub default_damping: f64,       // damping for the optional spring
    pub wander_min: f64,            // heading perturbation range per particle
    pub wander_max: f64,
    pub speed_min: f64,             // propulsion force range per particle
    pub speed_max: f64,
}
