//! Force contributors for the soup: damped Hookean springs and wander
//! steering.
//!
//! Both accumulate into each particle's acceleration buffer; the integrator
//! consumes the buffer afterwards, so multiple forces compose additively
//! within one tick.

use rand::rngs::StdRng;
use rand::Rng;

use crate::simulation::states::{NVec2, Wanderer};

/// A damped Hookean spring between two particles of one creature.
///
/// Endpoints are indices into the owning creature's particle array rather
/// than references, so the creature stays the single owner of its particles.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub a: usize,
    pub b: usize,
    pub rest_length: f64,
    pub stiffness: f64, // fraction of displacement converted to force
    pub damping: f64,
}

impl Spring {
    pub fn new(a: usize, b: usize, rest_length: f64, stiffness: f64, damping: f64) -> Self {
        Spring {
            a,
            b,
            rest_length,
            stiffness,
            damping,
        }
    }

    /// Accumulate the spring force into both endpoint accelerations.
    ///
    /// Skipped entirely when the endpoints nearly coincide, which would
    /// otherwise divide by zero when normalizing the direction.
    pub fn apply(&self, particles: &mut [Wanderer]) {
        let pa = &particles[self.a].body;
        let pb = &particles[self.b].body;

        let dx = pa.pos.x - pb.pos.x;
        let dy = pa.pos.y - pb.pos.y;

        let dist_sq = dx * dx + dy * dy;
        if dist_sq <= 0.001 {
            return; // degenerate: endpoints coincide
        }
        let dist = dist_sq.sqrt();

        // Displacement from rest length, scaled to a force per axis
        let target = (dist - self.rest_length) * self.stiffness;
        let mut fx = target;
        let mut fy = target;

        let nx = dx / dist;
        let ny = dy / dist;

        // Damping term: relative velocity projected per axis
        fx += self.damping * (pa.vel.x - pb.vel.x) * nx;
        fy += self.damping * (pa.vel.y - pb.vel.y) * ny;

        // Project along the (negated) normalized direction
        fx *= -nx;
        fy *= -ny;

        let force = NVec2::new(fx, fy);
        particles[self.a].body.acc += force;
        particles[self.b].body.acc -= force;
    }
}

/// Accumulate the wander propulsion force for one particle.
///
/// The heading receives a bounded uniform perturbation, then a constant
/// force along the heading is added. Runs before the base integration so
/// propulsion composes with any spring forces accumulated the same tick.
pub fn wander(w: &mut Wanderer, rng: &mut StdRng) {
    w.heading += rng.gen_range(-w.wander_rate..=w.wander_rate);
    w.body.acc.x += w.heading.cos() * w.speed;
    w.body.acc.y += w.heading.sin() * w.speed;
}
