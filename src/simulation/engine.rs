//! High-level runtime engine settings.
//!
//! Holds the population size and the viewport dimensions used for spawn
//! placement and off-screen culling. The viewport is injected here on
//! construction and updated on resize instead of living in ambient state.

#[derive(Debug, Clone)]
pub struct Engine {
    pub population: usize, // fixed number of creatures in the soup
    pub width: f64,        // viewport width in simulation units
    pub height: f64,       // viewport height in simulation units
}
