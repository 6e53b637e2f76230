//! A single drifting point of the backdrop.

use rand::Rng;

use super::surface::Surface;
use crate::constants::{MAX_AXIS_SPEED, MAX_OPACITY, MAX_RADIUS, MIN_OPACITY, MIN_RADIUS};

#[derive(Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    radius: f64,
    opacity: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64, opacity: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            radius,
            opacity,
        }
    }

    /// Sample a fresh particle somewhere inside the current bounds.
    ///
    /// All randomness happens here, once, at construction time; the caller
    /// supplies the generator so a seeded one gives a reproducible field.
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        Particle {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            vx: (rng.gen::<f64>() - 0.5) * 2.0 * MAX_AXIS_SPEED,
            vy: (rng.gen::<f64>() - 0.5) * 2.0 * MAX_AXIS_SPEED,
            radius: rng.gen::<f64>() * (MAX_RADIUS - MIN_RADIUS) + MIN_RADIUS,
            opacity: rng.gen::<f64>() * (MAX_OPACITY - MIN_OPACITY) + MIN_OPACITY,
        }
    }

    /// Advance one frame and bounce off the walls.
    ///
    /// The boundary check runs after the move, so a particle can overshoot
    /// the edge by one frame's travel before the reflected velocity brings
    /// it back.  That check-then-react order is intentional and matches the
    /// observed motion; don't "fix" it to a pre-move clamp.
    pub fn update(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.x, self.y, self.radius, self.opacity);
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_stays_inside_documented_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0);
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(p.vx.abs() <= MAX_AXIS_SPEED);
            assert!(p.vy.abs() <= MAX_AXIS_SPEED);
            assert!((MIN_RADIUS..=MAX_RADIUS).contains(&p.radius()));
            assert!((MIN_OPACITY..=MAX_OPACITY).contains(&p.opacity()));
        }
    }

    #[test]
    fn update_moves_by_velocity() {
        let mut p = Particle::new(10.0, 20.0, 0.1, -0.2, 1.0, 0.3);
        p.update(200.0, 200.0);
        assert!((p.x - 10.1).abs() < 1e-12);
        assert!((p.y - 19.8).abs() < 1e-12);
        assert_eq!(p.vx, 0.1);
        assert_eq!(p.vy, -0.2);
    }

    #[test]
    fn right_wall_bounce_keeps_overshoot() {
        // Crossing the edge is detected after the move: the position lands
        // at 200.3 and only the velocity flips.
        let mut p = Particle::new(199.9, 50.0, 0.4, 0.0, 1.0, 0.3);
        p.update(200.0, 200.0);
        assert!((p.x - 200.3).abs() < 1e-12);
        assert_eq!(p.vx, -0.4);

        // Next frame travels back inside; no second flip.
        p.update(200.0, 200.0);
        assert!((p.x - 199.9).abs() < 1e-12);
        assert_eq!(p.vx, -0.4);
    }

    #[test]
    fn top_wall_bounce_flips_vy() {
        let mut p = Particle::new(50.0, 0.05, 0.0, -0.2, 1.0, 0.3);
        p.update(200.0, 200.0);
        assert!(p.y < 0.0);
        assert_eq!(p.vy, 0.2);
    }

    #[test]
    fn bounce_fires_even_when_already_outside() {
        // A shrunken viewport can strand a particle past the edge; the
        // check still fires because it tests position, not crossing.
        let mut p = Particle::new(250.0, 50.0, 0.1, 0.0, 1.0, 0.3);
        p.update(200.0, 200.0);
        assert_eq!(p.vx, -0.1);
    }
}
