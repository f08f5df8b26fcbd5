//! Render collaborator boundary.
//!
//! The core never draws; on draw phases each creature hands read-only
//! snapshots to a `Canvas`. Implementations can rasterize, record, or ignore
//! them. All methods default to no-ops so observers can implement only what
//! they need.

use crate::simulation::states::{Colour, NVec2};

/// Read-only per-particle render data.
#[derive(Debug, Clone, Copy)]
pub struct ParticleSnapshot {
    pub position: NVec2,
    pub radius: f64,
    pub heading: f64,  // velocity angle in radians, for orientation
    pub speed_sq: f64, // velocity magnitude squared, for stroke modulation
    pub colour: Colour,
}

/// Receiver for draw-phase output.
pub trait Canvas {
    /// Called once per spring with both endpoint positions.
    fn draw_spring(&mut self, _a: NVec2, _b: NVec2) {}

    /// Called once per particle after all springs of the same creature.
    fn draw_particle(&mut self, _particle: &ParticleSnapshot) {}
}

/// A canvas that discards everything. Use when stepping headless.
pub struct NullCanvas;

impl Canvas for NullCanvas {}
