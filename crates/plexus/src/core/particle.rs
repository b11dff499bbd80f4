//! A single drifting point of the background network.

use glam::Vec2;

use super::rng::Rng;
use crate::api::config::FieldConfig;

/// A single particle with motion and draw state.
///
/// `radius` and `opacity` are fixed at creation; only `position` and
/// `velocity` change between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Particle { position, velocity, radius, opacity }
    }

    /// Draw a particle uniformly inside a `width` x `height` viewport.
    pub fn random(rng: &mut Rng, width: f32, height: f32, config: &FieldConfig) -> Self {
        let position = Vec2::new(rng.range(0.0, width), rng.range(0.0, height));
        let velocity = Vec2::new(
            rng.range(-config.max_speed, config.max_speed),
            rng.range(-config.max_speed, config.max_speed),
        );
        let [r_lo, r_hi] = config.radius_range;
        let [o_lo, o_hi] = config.opacity_range;
        Particle {
            position,
            velocity,
            radius: rng.range(r_lo, r_hi),
            opacity: rng.range(o_lo, o_hi),
        }
    }

    /// Advance one tick and reflect off the viewport edges.
    ///
    /// The edge test uses the updated position, so a particle can sit up to one
    /// tick of travel outside the viewport before it turns around.
    pub fn tick(&mut self, width: f32, height: f32) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }
    }
}
