//! The particle collection and its per-frame pass.

use rand::Rng;

use super::particle::Particle;
use super::surface::Surface;
use crate::constants::{LINK_BASE_ALPHA, LINK_DISTANCE, LINK_LINE_WIDTH};

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new<R: Rng>(rng: &mut R, width: f64, height: f64, count: usize) -> ParticleField {
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(rng, width, height));
        }
        ParticleField {
            particles,
            width,
            height,
        }
    }

    /// Build a field from pre-made particles.  Used by tests to pin exact
    /// positions and velocities.
    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> ParticleField {
        ParticleField {
            particles,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// One frame: clear, move and paint every particle, then link close
    /// pairs.  Nothing besides the particles' motion state changes between
    /// calls.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        for particle in &mut self.particles {
            particle.update(self.width, self.height);
            particle.draw(surface);
        }
        self.link_pass(surface);
    }

    /// Update the bounds after a viewport change.  Particles are left where
    /// they are; the boundary check in `Particle::update` also fires for
    /// positions already outside, so a shrink sorts itself out over the
    /// following frames.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Connect every pair closer than `LINK_DISTANCE` with a line whose
    /// alpha fades linearly to zero at the cutoff.  Each unordered pair is
    /// visited once; O(n²) is fine at 60 particles.
    fn link_pass(&self, surface: &mut dyn Surface) {
        for a in 0..self.particles.len() {
            for b in (a + 1)..self.particles.len() {
                let dx = self.particles[a].x - self.particles[b].x;
                let dy = self.particles[a].y - self.particles[b].y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < LINK_DISTANCE {
                    let alpha = LINK_BASE_ALPHA * (1.0 - dist / LINK_DISTANCE);
                    surface.stroke_line(
                        self.particles[a].x,
                        self.particles[a].y,
                        self.particles[b].x,
                        self.particles[b].y,
                        alpha,
                        LINK_LINE_WIDTH,
                    );
                }
            }
        }
    }
}
