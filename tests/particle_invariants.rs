//! Property tests over the particle simulation core.
//!
//! These pin down the invariants the visual output relies on: constant
//! per-axis speed, immutable radius/opacity, the link-alpha envelope and
//! the post-move bounce rule.
//!
//! Run with: cargo test --test particle_invariants

use proptest::prelude::*;

use portfolio_frontend::constants::{
    LINK_BASE_ALPHA, MAX_AXIS_SPEED, MAX_OPACITY, MAX_RADIUS, MIN_OPACITY, MIN_RADIUS,
};
use portfolio_frontend::particles::{Particle, ParticleField, Surface};

/// Surface that keeps the link alphas and discards everything else.
#[derive(Default)]
struct LinkCollector {
    alphas: Vec<f64>,
}

impl Surface for LinkCollector {
    fn width(&self) -> f64 {
        0.0
    }
    fn height(&self) -> f64 {
        0.0
    }
    fn clear(&mut self) {}
    fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _alpha: f64) {}
    fn stroke_line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, alpha: f64, _width: f64) {
        self.alphas.push(alpha);
    }
}

fn particle_strategy() -> impl Strategy<Value = Particle> {
    (
        -50.0..850.0f64,
        -50.0..650.0f64,
        -MAX_AXIS_SPEED..MAX_AXIS_SPEED,
        -MAX_AXIS_SPEED..MAX_AXIS_SPEED,
        MIN_RADIUS..MAX_RADIUS,
        MIN_OPACITY..MAX_OPACITY,
    )
        .prop_map(|(x, y, vx, vy, radius, opacity)| Particle::new(x, y, vx, vy, radius, opacity))
}

proptest! {
    /// Bounces only ever flip sign; per-axis speed is constant forever.
    #[test]
    fn axis_speed_magnitude_is_preserved(
        p in particle_strategy(),
        steps in 1usize..500,
    ) {
        let mut p = p;
        let speed_x = p.vx.abs();
        let speed_y = p.vy.abs();
        for _ in 0..steps {
            p.update(800.0, 600.0);
            prop_assert!((p.vx.abs() - speed_x).abs() < 1e-12);
            prop_assert!((p.vy.abs() - speed_y).abs() < 1e-12);
        }
    }

    /// A coordinate that is out of range before the move has a flipped
    /// velocity after it; an interior coordinate that stays interior keeps
    /// its velocity.
    #[test]
    fn bounce_follows_the_post_move_check(
        p in particle_strategy(),
    ) {
        let mut p = p;
        let (vx_before, vy_before) = (p.vx, p.vy);
        let moved_x = p.x + p.vx;
        let moved_y = p.y + p.vy;
        p.update(800.0, 600.0);

        let expect_flip_x = moved_x < 0.0 || moved_x > 800.0;
        let expect_flip_y = moved_y < 0.0 || moved_y > 600.0;
        prop_assert_eq!(p.vx, if expect_flip_x { -vx_before } else { vx_before });
        prop_assert_eq!(p.vy, if expect_flip_y { -vy_before } else { vy_before });
        // Position is never clamped, only reflected on later frames.
        prop_assert_eq!(p.x, moved_x);
        prop_assert_eq!(p.y, moved_y);
    }

    /// Radius and opacity are construction-time constants.
    #[test]
    fn appearance_fields_never_change(
        particles in proptest::collection::vec(particle_strategy(), 2..20),
        ticks in 1usize..50,
    ) {
        let fixed: Vec<(f64, f64)> =
            particles.iter().map(|p| (p.radius(), p.opacity())).collect();
        let mut field = ParticleField::from_particles(particles, 800.0, 600.0);
        let mut surface = LinkCollector::default();
        for _ in 0..ticks {
            field.tick(&mut surface);
        }
        for (p, (radius, opacity)) in field.particles().iter().zip(fixed) {
            prop_assert_eq!(p.radius(), radius);
            prop_assert_eq!(p.opacity(), opacity);
        }
    }

    /// Every drawn link fades within (0, LINK_BASE_ALPHA].
    #[test]
    fn link_alpha_stays_in_envelope(
        particles in proptest::collection::vec(particle_strategy(), 2..30),
    ) {
        let count = particles.len();
        let mut field = ParticleField::from_particles(particles, 800.0, 600.0);
        let mut surface = LinkCollector::default();
        field.tick(&mut surface);

        prop_assert!(surface.alphas.len() <= count * (count - 1) / 2);
        for alpha in &surface.alphas {
            prop_assert!(*alpha > 0.0 && *alpha <= LINK_BASE_ALPHA);
        }
    }

    /// Re-applying the same bounds is a no-op for every particle.
    #[test]
    fn resize_is_idempotent(
        particles in proptest::collection::vec(particle_strategy(), 1..20),
        w in 100.0..2000.0f64,
        h in 100.0..2000.0f64,
    ) {
        let snapshot: Vec<(f64, f64, f64, f64)> =
            particles.iter().map(|p| (p.x, p.y, p.vx, p.vy)).collect();
        let mut field = ParticleField::from_particles(particles, 800.0, 600.0);
        field.resize(w, h);
        field.resize(w, h);
        prop_assert_eq!(field.width(), w);
        prop_assert_eq!(field.height(), h);
        let after: Vec<(f64, f64, f64, f64)> =
            field.particles().iter().map(|p| (p.x, p.y, p.vx, p.vy)).collect();
        prop_assert_eq!(snapshot, after);
    }
}
