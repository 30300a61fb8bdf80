//! Particle field state for the constellation background
//!
//! A fixed-size batch of slow-moving points. The whole batch is rebuilt on
//! every viewport resize; there is no per-particle lifecycle.

use rand::Rng;

/// Fixed particle count — few enough for a minimalist look.
pub const NUM_PARTICLES: usize = 80;
/// Maximum distance at which two particles are visually linked.
pub const CONNECTION_DISTANCE: f32 = 150.0;
/// Connection-line opacity at zero distance; falls linearly to 0 at
/// [`CONNECTION_DISTANCE`].
pub const LINE_MAX_OPACITY: f32 = 0.15;

/// Per-axis speed bound, px per frame.
const MAX_SPEED: f32 = 0.25;
const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 3.0;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

impl Particle {
    fn random(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen::<f32>() * width,
            y: rng.gen::<f32>() * height,
            vx: (rng.gen::<f32>() - 0.5) * 2.0 * MAX_SPEED,
            vy: (rng.gen::<f32>() - 0.5) * 2.0 * MAX_SPEED,
            radius: MIN_RADIUS + rng.gen::<f32>() * (MAX_RADIUS - MIN_RADIUS),
        }
    }
}

pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_rng(width, height, &mut rand::thread_rng())
    }

    pub fn with_rng(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let particles = (0..NUM_PARTICLES)
            .map(|_| Particle::random(width, height, rng))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    /// Rebuild the whole field for a new viewport. Existing particles are
    /// discarded, not migrated.
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every particle by one frame. A coordinate that has crossed a
    /// boundary gets its velocity component negated — the particle may sit
    /// outside the bound for this one frame before travelling back.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    /// Visit every pair of particles closer than [`CONNECTION_DISTANCE`],
    /// each pair once, with the line opacity for their distance.
    pub fn for_each_connection(&self, mut f: impl FnMut(&Particle, &Particle, f32)) {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < CONNECTION_DISTANCE {
                    f(a, b, connection_opacity(distance));
                }
            }
        }
    }
}

/// Line opacity as a function of pair distance: linear from
/// [`LINE_MAX_OPACITY`] at 0 down to 0 at [`CONNECTION_DISTANCE`].
pub fn connection_opacity(distance: f32) -> f32 {
    if distance >= CONNECTION_DISTANCE {
        return 0.0;
    }
    (1.0 - distance / CONNECTION_DISTANCE) * LINE_MAX_OPACITY
}
