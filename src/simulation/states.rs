//! Core state types for the soup simulation.
//!
//! Defines the 2D vector alias and helpers, the fixed colour palette, and the
//! body/aggregate structs:
//! - `Particle`  point mass with cached inverse mass
//! - `Wanderer`  particle plus autonomous random-walk steering state
//! - `Creature`  soft-body aggregate of wanderers linked by springs
//! - `Soup`      the full population plus the current phase and tick count

use std::f64::consts::PI;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::simulation::engine::Engine;
use crate::simulation::forces::Spring;
use crate::simulation::params::Parameters;
use crate::simulation::render::{Canvas, ParticleSnapshot};

pub type NVec2 = Vector2<f64>;

/// Clamp `v` to length `n` in place. No-op at zero magnitude.
pub fn limit(v: &mut NVec2, n: f64) {
    let m = v.norm();
    if m > 0.0 {
        *v *= n / m;
    }
}

/// Angle of `v` in radians, measured from the +x axis.
pub fn heading(v: &NVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Fixed six-entry palette shared by every creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,    // #FD1811
    Coral,  // #F54B45
    Orange, // #F68D0C
    Yellow, // #ECF00F
    Green,  // #91C878
    Cyan,   // #00B9D2
}

impl Colour {
    pub const ALL: [Colour; 6] = [
        Colour::Red,
        Colour::Coral,
        Colour::Orange,
        Colour::Yellow,
        Colour::Green,
        Colour::Cyan,
    ];

    /// sRGB components of the palette entry.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Colour::Red => (0xFD, 0x18, 0x11),
            Colour::Coral => (0xF5, 0x4B, 0x45),
            Colour::Orange => (0xF6, 0x8D, 0x0C),
            Colour::Yellow => (0xEC, 0xF0, 0x0F),
            Colour::Green => (0x91, 0xC8, 0x78),
            Colour::Cyan => (0x00, 0xB9, 0xD2),
        }
    }

    /// Pick a palette entry uniformly at random.
    pub fn pick(rng: &mut StdRng) -> Colour {
        Colour::ALL[rng.gen_range(0..Colour::ALL.len())]
    }
}

/// A point mass integrated with explicit Euler and global drag.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: NVec2,
    pub vel: NVec2,
    pub acc: NVec2, // force accumulator, consumed and reset by integration
    pub mass: f64,
    pub mass_inv: f64, // cached 1/mass, recompute if mass ever changes
    pub radius: f64,
    pub fixed: bool, // frozen in place, integration is a no-op
    pub colour: Colour,
}

impl Particle {
    pub fn new(pos: NVec2, mass: f64, radius: f64, colour: Colour) -> Self {
        Particle {
            pos,
            vel: NVec2::zeros(),
            acc: NVec2::zeros(),
            mass,
            mass_inv: 1.0 / mass,
            radius,
            fixed: false,
            colour,
        }
    }
}

/// A particle with autonomous steering: a smoothly turning random walk.
///
/// Each tick the heading receives a bounded random perturbation and a
/// propulsion force along the heading is accumulated before the base
/// particle integration runs.
#[derive(Debug, Clone)]
pub struct Wanderer {
    pub body: Particle,
    pub heading: f64,     // current travel direction in radians
    pub wander_rate: f64, // max per-tick heading perturbation
    pub speed: f64,       // propulsion force magnitude
}

impl Wanderer {
    pub fn spawn(
        pos: NVec2,
        mass: f64,
        radius: f64,
        colour: Colour,
        params: &Parameters,
        rng: &mut StdRng,
    ) -> Self {
        Wanderer {
            body: Particle::new(pos, mass, radius, colour),
            heading: rng.gen_range(0.0..PI),
            wander_rate: rng.gen_range(params.wander_min..=params.wander_max),
            speed: rng.gen_range(params.speed_min..=params.speed_max),
        }
    }
}

/// A soft-body aggregate: wanderers linked by springs into a random
/// connected graph, spawned at a single origin point.
///
/// Springs store indices into `particles` and never reference anything
/// outside the owning creature.
#[derive(Debug, Clone)]
pub struct Creature {
    pub particles: Vec<Wanderer>,
    pub springs: Vec<Spring>,
    pub origin: NVec2, // spawn point
    pub colour: Colour,
    pub dead: bool, // set when the bounding box leaves the viewport
}

impl Creature {
    /// Build a fresh creature at a random origin inside the viewport.
    ///
    /// Picks `n` particles in the configured range. Particle 0 is the anchor
    /// and gets a radius boost. Every later particle is linked by one
    /// mandatory spring to a random earlier particle, plus an optional
    /// long-range spring at default stiffness/damping.
    pub fn spawn(engine: &Engine, params: &Parameters, rng: &mut StdRng) -> Self {
        let origin = NVec2::new(
            rng.gen_range(0.0..engine.width),
            rng.gen_range(0.0..engine.height),
        );
        let colour = Colour::pick(rng);
        let n = rng.gen_range(params.particles_min..=params.particles_max);

        let mut particles: Vec<Wanderer> = Vec::with_capacity(n);
        let mut springs = Vec::new();

        for i in 0..n {
            let mut radius = rng.gen_range(params.radius_min..=params.radius_max);
            if i == 0 {
                radius += rng.gen_range(0.0..=params.anchor_boost);
            }
            let mass = rng.gen_range(params.mass_min..=params.mass_max);

            if i > 0 {
                springs.push(Spring::new(
                    i,
                    rng.gen_range(0..i),
                    rng.gen_range(0.0..=params.rest_max),
                    rng.gen_range(params.stiffness_min..=params.stiffness_max),
                    rng.gen_range(params.spring_damping_min..=params.spring_damping_max),
                ));

                if rng.gen_bool(params.second_spring_chance) {
                    springs.push(Spring::new(
                        i,
                        rng.gen_range(0..i),
                        rng.gen_range(0.0..=params.long_rest_max),
                        params.default_stiffness,
                        params.default_damping,
                    ));
                }
            }

            particles.push(Wanderer::spawn(origin, mass, radius, colour, params, rng));
        }

        Creature {
            particles,
            springs,
            origin,
            colour,
            dead: false,
        }
    }

    /// Hand the creature to the render collaborator: springs first, then
    /// particles, in construction order.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for s in &self.springs {
            canvas.draw_spring(self.particles[s.a].body.pos, self.particles[s.b].body.pos);
        }
        for w in &self.particles {
            canvas.draw_particle(&ParticleSnapshot {
                position: w.body.pos,
                radius: w.body.radius,
                heading: heading(&w.body.vel),
                speed_sq: w.body.vel.norm_squared(),
                colour: w.body.colour,
            });
        }
    }

    /// Release the particle and spring collections. The creature must not be
    /// updated or drawn afterwards; the soup replaces it on the same tick.
    pub fn kill(&mut self) {
        self.particles = Vec::new();
        self.springs = Vec::new();
    }
}

/// Which half of the frame-sliced loop a `step` call performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Update,
    Draw,
}

/// The whole population plus phase bookkeeping.
///
/// Physics and rendering are time-sliced 1:1 across successive steps, so the
/// simulation advances at half the external frame rate by design.
#[derive(Debug, Clone)]
pub struct Soup {
    pub creatures: Vec<Creature>,
    pub phase: Phase,
    pub tick: u64,
}

impl Soup {
    pub fn new(creatures: Vec<Creature>) -> Self {
        Soup {
            creatures,
            phase: Phase::Update,
            tick: 0,
        }
    }
}
