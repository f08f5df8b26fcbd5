pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{heading, limit, Colour, Creature, NVec2, Particle, Phase, Soup, Wanderer};
pub use simulation::forces::{wander, Spring};
pub use simulation::integrator::{integrate, step_creature, step_soup, DRAG};
pub use simulation::render::{Canvas, NullCanvas, ParticleSnapshot};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, ScenarioConfig};

pub use visualization::soup_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_step_curve};
