use super::particle::Particle;
use super::rng::Rng;
use crate::api::config::FieldConfig;

/// Number of particles a viewport earns: `min(cap, floor(w * h / area_per_particle))`.
///
/// Negative and NaN extents count as zero.
pub fn population_for(width: f32, height: f32, config: &FieldConfig) -> usize {
    let area = width.max(0.0) * height.max(0.0);
    if area <= 0.0 || config.area_per_particle <= 0.0 {
        return 0;
    }
    let earned = (area / config.area_per_particle).floor() as usize;
    earned.min(config.max_particles)
}

/// The simulated population for one viewport.
///
/// Particles are stored in a flat Vec whose order never changes between
/// resizes, so the connection pass always walks pairs in the same order.
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    config: FieldConfig,
    rng: Rng,
}

impl ParticleField {
    /// Create an empty field. Call `initialize` to populate it.
    ///
    /// Nothing is reserved up front: `max_particles` comes from the host and
    /// may be far above what any viewport earns.
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            config: config.normalized(),
            rng: Rng::new(seed),
        }
    }

    /// Build a field from explicit particles, e.g. a restored layout.
    pub fn from_particles(width: f32, height: f32, particles: Vec<Particle>, config: FieldConfig) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            particles,
            config: config.normalized(),
            rng: Rng::new(1),
        }
    }

    /// Discard the current population and spawn a fresh one for the viewport.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let count = population_for(self.width, self.height, &self.config);
        self.particles.clear();
        for _ in 0..count {
            let p = Particle::random(&mut self.rng, self.width, self.height, &self.config);
            self.particles.push(p);
        }
    }

    /// Move every particle one tick and reflect the ones that left the viewport.
    pub fn advance(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.tick(w, h);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn field() -> ParticleField {
        ParticleField::new(FieldConfig::default(), 42)
    }

    #[test]
    fn population_follows_area_formula() {
        let cfg = FieldConfig::default();
        assert_eq!(population_for(300.0, 200.0, &cfg), 4); // 60000 / 15000
        assert_eq!(population_for(100.0, 149.0, &cfg), 0); // 14900 / 15000
        assert_eq!(population_for(150.0, 100.0, &cfg), 1);
        assert_eq!(population_for(1000.0, 600.0, &cfg), 40);
    }

    #[test]
    fn population_is_capped() {
        let cfg = FieldConfig::default();
        assert_eq!(population_for(1920.0, 1080.0, &cfg), 80);
        assert_eq!(population_for(10_000.0, 10_000.0, &cfg), 80);
    }

    #[test]
    fn degenerate_viewports_have_no_particles() {
        let cfg = FieldConfig::default();
        assert_eq!(population_for(0.0, 1080.0, &cfg), 0);
        assert_eq!(population_for(1920.0, 0.0, &cfg), 0);
        assert_eq!(population_for(-800.0, 600.0, &cfg), 0);
        assert_eq!(population_for(-800.0, -600.0, &cfg), 0);
        assert_eq!(population_for(f32::NAN, 600.0, &cfg), 0);
    }

    #[test]
    fn initialize_spawns_inside_viewport() {
        let mut f = field();
        f.initialize(800.0, 600.0);
        assert_eq!(f.len(), 32);
        for p in f.particles() {
            assert!((0.0..=800.0).contains(&p.position.x));
            assert!((0.0..=600.0).contains(&p.position.y));
        }
    }

    #[test]
    fn repeated_initialize_keeps_count_not_positions() {
        let mut f = field();
        f.initialize(1280.0, 720.0);
        let first: Vec<Particle> = f.particles().to_vec();
        f.initialize(1280.0, 720.0);
        assert_eq!(f.len(), first.len());
        assert_eq!(f.len(), 61);
    }

    #[test]
    fn resize_replaces_whole_population() {
        let mut f = field();
        f.initialize(1920.0, 1080.0);
        assert_eq!(f.len(), 80);

        f.initialize(400.0, 300.0);
        assert_eq!(f.len(), 8);
        for p in f.particles() {
            assert!(p.position.x <= 400.0 && p.position.y <= 300.0);
        }
    }

    #[test]
    fn zero_area_field_is_inert() {
        let mut f = field();
        f.initialize(0.0, 0.0);
        assert!(f.is_empty());
        f.advance();
        assert!(f.is_empty());
    }

    #[test]
    fn advance_keeps_particles_within_one_tick_of_bounds() {
        let mut f = field();
        f.initialize(640.0, 480.0);
        let slack = f.config().max_speed + 1e-3;
        for _ in 0..5_000 {
            f.advance();
            for p in f.particles() {
                assert!(p.position.x >= -slack && p.position.x <= 640.0 + slack, "x = {}", p.position.x);
                assert!(p.position.y >= -slack && p.position.y <= 480.0 + slack, "y = {}", p.position.y);
            }
        }
    }

    #[test]
    fn advance_reflects_explicit_particle() {
        let p = Particle::new(Vec2::new(199.95, 10.0), Vec2::new(0.3, 0.0), 1.0, 0.2);
        let mut f = ParticleField::from_particles(200.0, 100.0, vec![p], FieldConfig::default());

        f.advance();
        let after = f.particles()[0];
        assert!(after.position.x > 200.0);
        assert!(after.velocity.x < 0.0);

        f.advance();
        assert!(f.particles()[0].position.x < after.position.x);
    }

    #[test]
    fn huge_cap_is_bounded_by_area() {
        let cfg = FieldConfig::from_json(r#"{"max_particles":18446744073709551615}"#).unwrap();
        let mut f = ParticleField::new(cfg, 1);
        f.initialize(300.0, 200.0);
        assert_eq!(f.len(), 4);
    }

    #[test]
    fn reversed_ranges_still_spread_particles() {
        let cfg = FieldConfig {
            max_speed: -0.2,
            radius_range: [2.0, 0.5],
            opacity_range: [0.5, 0.1],
            ..FieldConfig::default()
        };
        let mut f = ParticleField::new(cfg, 9);
        f.initialize(1920.0, 1080.0);

        let first = f.particles()[0];
        assert!(f.particles().iter().any(|p| p.velocity != first.velocity));
        assert!(f.particles().iter().any(|p| p.radius != first.radius));
        for p in f.particles() {
            assert!(p.velocity.x.abs() <= 0.2 && p.velocity.y.abs() <= 0.2);
            assert!((0.5..=2.0).contains(&p.radius));
            assert!((0.1..=0.5).contains(&p.opacity));
        }
    }

    #[test]
    fn from_particles_clamps_negative_viewport() {
        let f = ParticleField::from_particles(-10.0, 50.0, Vec::new(), FieldConfig::default());
        assert_eq!(f.width(), 0.0);
        assert_eq!(f.height(), 50.0);
    }
}
