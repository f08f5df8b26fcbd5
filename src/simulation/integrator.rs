//! Frame-coupled stepping for the soup.
//!
//! Provides the explicit-Euler particle integration, the per-creature tick
//! (wander + integrate + springs + viewport culling), and the soup step that
//! alternates update and draw phases and recycles dead creatures.
//!
//! Integration is deliberately frame-coupled: there is no delta-time, so the
//! simulation speed follows the rate at which the caller invokes `step_soup`.
//! A test harness can drive it with synthetic calls at any rate.

use rand::rngs::StdRng;

use crate::simulation::engine::Engine;
use crate::simulation::forces::wander;
use crate::simulation::params::Parameters;
use crate::simulation::render::Canvas;
use crate::simulation::states::{Creature, NVec2, Particle, Phase, Soup};

/// Global velocity drag applied on every integration step. Fixed by the
/// model, not configuration.
pub const DRAG: f64 = 0.9;

/// Advance one particle by one tick with explicit Euler integration.
///
/// Order matters: the accumulated acceleration contributes to velocity
/// before drag is applied, and the accumulator is reset only at the end.
/// Fixed particles are left untouched, accumulator included.
pub fn integrate(p: &mut Particle) {
    if p.fixed {
        return;
    }

    p.acc *= p.mass_inv;
    p.vel += p.acc;
    p.pos += p.vel;

    p.vel *= DRAG;
    p.acc = NVec2::zeros();
}

/// Advance one creature by one tick.
///
/// Every particle wanders and integrates first; springs then accumulate
/// forces for the next tick, reading the freshly integrated positions.
/// Particle extents (sampled before integration) feed a rough axis-aligned
/// bounding box; if the box lies entirely outside the viewport on any side
/// the creature is marked dead.
pub fn step_creature(creature: &mut Creature, engine: &Engine, rng: &mut StdRng) {
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;

    let Creature {
        particles, springs, ..
    } = creature;

    for w in particles.iter_mut() {
        let p = &w.body;
        min_x = min_x.min(p.pos.x - p.radius);
        max_x = max_x.max(p.pos.x + p.radius);
        min_y = min_y.min(p.pos.y - p.radius);
        max_y = max_y.max(p.pos.y + p.radius);

        wander(w, rng);
        integrate(&mut w.body);
    }

    for s in springs.iter() {
        s.apply(particles);
    }

    if max_x < 0.0 || min_x > engine.width || max_y < 0.0 || min_y > engine.height {
        creature.dead = true;
    }
}

/// Perform exactly one phase of the soup loop and toggle to the other.
///
/// - `Update`: advance every live creature one tick; dead creatures are
///   killed and replaced with fresh spawns at new random origins instead of
///   being updated.
/// - `Draw`: hand every creature to the canvas, in population order.
///
/// Returns the phase that ran, so callers can tell whether physics advanced.
pub fn step_soup(
    soup: &mut Soup,
    engine: &Engine,
    params: &Parameters,
    rng: &mut StdRng,
    canvas: &mut dyn Canvas,
) -> Phase {
    let ran = soup.phase;

    match soup.phase {
        Phase::Update => {
            for creature in soup.creatures.iter_mut() {
                if creature.dead {
                    creature.kill();
                    *creature = Creature::spawn(engine, params, rng);
                } else {
                    step_creature(creature, engine, rng);
                }
            }
            soup.phase = Phase::Draw;
        }
        Phase::Draw => {
            for creature in soup.creatures.iter() {
                creature.draw(canvas);
            }
            soup.phase = Phase::Update;
        }
    }

    soup.tick += 1;
    ran
}
