//! Constellation background — drifting points joined by faint lines

pub mod data;
pub mod renderer;

pub use data::{connection_opacity, Particle, ParticleField, CONNECTION_DISTANCE, NUM_PARTICLES};
pub use renderer::paint_field;
