use super::color::Color;
use super::traits::Surface;
use crate::api::config::FieldConfig;
use crate::api::types::FrameStats;
use crate::core::field::ParticleField;
use crate::systems::links::for_each_link;

/// Draws a `ParticleField` onto a `Surface`: discs first, then connections.
///
/// Holds only drawing parameters; the surface is borrowed per frame.
#[derive(Debug, Clone)]
pub struct FieldRenderer {
    color: Color,
    link_distance: f32,
    link_max_alpha: f32,
    link_width: f32,
}

impl FieldRenderer {
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            color: Color::from(config.color),
            link_distance: config.link_distance,
            link_max_alpha: config.link_max_alpha,
            link_width: config.link_width,
        }
    }

    /// Clear the surface and draw one frame. A zero-size surface is left untouched.
    pub fn draw_frame<S: Surface + ?Sized>(&self, field: &ParticleField, surface: &mut S) -> FrameStats {
        let (w, h) = surface.size();
        if !(w > 0.0 && h > 0.0) {
            return FrameStats::default();
        }

        surface.clear();

        let particles = field.particles();
        for p in particles {
            surface.fill_disc(p.position, p.radius, self.color.with_alpha(p.opacity));
        }

        let mut links = 0usize;
        let pairs_checked = for_each_link(particles, self.link_distance, self.link_max_alpha, |link| {
            surface.stroke_segment(link.from, link.to, self.link_width, self.color.with_alpha(link.alpha));
            links += 1;
        });

        FrameStats {
            discs: particles.len(),
            links,
            pairs_checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::particle::Particle;
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Disc(Vec2, f32, Color),
        Segment(Vec2, Vec2, f32, Color),
    }

    struct Recorder {
        size: (f32, f32),
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn backend(&self) -> &'static str {
            "recorder"
        }
        fn size(&self) -> (f32, f32) {
            self.size
        }
        fn resize(&mut self, width: f32, height: f32) {
            self.size = (width, height);
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn fill_disc(&mut self, center: Vec2, radius: f32, color: Color) {
            self.ops.push(Op::Disc(center, radius, color));
        }
        fn stroke_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
            self.ops.push(Op::Segment(from, to, width, color));
        }
    }

    fn field_of(points: &[(f32, f32, f32)]) -> ParticleField {
        let particles = points
            .iter()
            .map(|&(x, y, opacity)| Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.5, opacity))
            .collect();
        ParticleField::from_particles(400.0, 300.0, particles, FieldConfig::default())
    }

    #[test]
    fn clears_then_discs_then_links() {
        let field = field_of(&[(10.0, 10.0, 0.2), (70.0, 10.0, 0.4), (390.0, 290.0, 0.3)]);
        let renderer = FieldRenderer::new(&FieldConfig::default());
        let mut surface = Recorder { size: (400.0, 300.0), ops: Vec::new() };

        let stats = renderer.draw_frame(&field, &mut surface);

        assert_eq!(stats, FrameStats { discs: 3, links: 1, pairs_checked: 3 });
        assert_eq!(surface.ops.len(), 5);
        assert_eq!(surface.ops[0], Op::Clear);
        assert!(matches!(surface.ops[1], Op::Disc(..)));
        assert!(matches!(surface.ops[3], Op::Disc(..)));
        match surface.ops[4] {
            Op::Segment(from, to, width, color) => {
                assert_eq!(from, Vec2::new(10.0, 10.0));
                assert_eq!(to, Vec2::new(70.0, 10.0));
                assert_eq!(width, 0.5);
                assert!((color.a - 0.06).abs() < 1e-6);
            }
            ref other => panic!("expected a segment, got {:?}", other),
        }
    }

    #[test]
    fn discs_use_particle_opacity_and_fixed_hue() {
        let field = field_of(&[(10.0, 10.0, 0.35)]);
        let renderer = FieldRenderer::new(&FieldConfig::default());
        let mut surface = Recorder { size: (400.0, 300.0), ops: Vec::new() };

        renderer.draw_frame(&field, &mut surface);

        match surface.ops[1] {
            Op::Disc(center, radius, color) => {
                assert_eq!(center, Vec2::new(10.0, 10.0));
                assert_eq!(radius, 1.5);
                assert_eq!(color, Color::rgb8(37, 99, 235).with_alpha(0.35));
            }
            ref other => panic!("expected a disc, got {:?}", other),
        }
    }

    #[test]
    fn zero_size_surface_is_a_no_op() {
        let field = field_of(&[(10.0, 10.0, 0.2), (20.0, 10.0, 0.2)]);
        let renderer = FieldRenderer::new(&FieldConfig::default());
        let mut surface = Recorder { size: (0.0, 300.0), ops: Vec::new() };

        let stats = renderer.draw_frame(&field, &mut surface);

        assert_eq!(stats, FrameStats::default());
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn empty_field_still_clears() {
        let field = field_of(&[]);
        let renderer = FieldRenderer::new(&FieldConfig::default());
        let mut surface = Recorder { size: (400.0, 300.0), ops: Vec::new() };

        renderer.draw_frame(&field, &mut surface);
        assert_eq!(surface.ops, vec![Op::Clear]);
    }
}
