//! Proximity pass: which particle pairs get a connecting line, and how faint.
//!
//! Every unordered pair is checked each frame. With the population capped at
//! 80 that is at most 3160 distance tests, so no spatial index is kept. If the
//! cap is ever raised, bucket particles into a grid of `link_distance` cells
//! and only test neighbouring cells; the alpha rule below stays the same.

use glam::Vec2;

use crate::core::particle::Particle;

/// A connection between particles `a` and `b` (indices, `a < b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke alpha, in (0, max_alpha].
    pub alpha: f32,
}

/// Stroke alpha for a pair at `distance`: `(1 - d / threshold) * max_alpha`.
///
/// Zero at and beyond the threshold. Coincident particles get `max_alpha`.
pub fn link_opacity(distance: f32, threshold: f32, max_alpha: f32) -> f32 {
    if threshold <= 0.0 || !(distance < threshold) {
        return 0.0;
    }
    (1.0 - distance / threshold) * max_alpha
}

/// Visit every pair closer than `threshold`, in nested (i, j) order.
///
/// Returns the number of pairs examined.
pub fn for_each_link(
    particles: &[Particle],
    threshold: f32,
    max_alpha: f32,
    mut visit: impl FnMut(Link),
) -> usize {
    let mut checked = 0usize;
    for i in 0..particles.len() {
        let pi = particles[i].position;
        for j in (i + 1)..particles.len() {
            checked += 1;
            let pj = particles[j].position;
            let dist = pi.distance(pj);
            if dist < threshold {
                visit(Link {
                    a: i,
                    b: j,
                    from: pi,
                    to: pj,
                    alpha: link_opacity(dist, threshold, max_alpha),
                });
            }
        }
    }
    checked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.0, 0.3)
    }

    fn links(particles: &[Particle]) -> Vec<Link> {
        let mut out = Vec::new();
        for_each_link(particles, 120.0, 0.12, |l| out.push(l));
        out
    }

    #[test]
    fn opacity_at_reference_distances() {
        assert!((link_opacity(0.0, 120.0, 0.12) - 0.12).abs() < 1e-6);
        assert!((link_opacity(60.0, 120.0, 0.12) - 0.06).abs() < 1e-6);
        assert_eq!(link_opacity(120.0, 120.0, 0.12), 0.0);
        assert_eq!(link_opacity(500.0, 120.0, 0.12), 0.0);
    }

    #[test]
    fn opacity_handles_degenerate_inputs() {
        assert_eq!(link_opacity(f32::NAN, 120.0, 0.12), 0.0);
        assert_eq!(link_opacity(10.0, 0.0, 0.12), 0.0);
    }

    #[test]
    fn pair_at_threshold_is_not_linked() {
        let particles = [at(0.0, 0.0), at(120.0, 0.0)];
        assert!(links(&particles).is_empty());
    }

    #[test]
    fn coincident_pair_gets_max_alpha() {
        let particles = [at(50.0, 50.0), at(50.0, 50.0)];
        let found = links(&particles);
        assert_eq!(found.len(), 1);
        assert!((found[0].alpha - 0.12).abs() < 1e-6);
    }

    #[test]
    fn diagonal_distance_is_euclidean() {
        // 3-4-5 triangle scaled to 60
        let particles = [at(0.0, 0.0), at(36.0, 48.0)];
        let found = links(&particles);
        assert_eq!(found.len(), 1);
        assert!((found[0].alpha - 0.06).abs() < 1e-6);
    }

    #[test]
    fn pairs_visited_in_nested_order() {
        let particles = [at(0.0, 0.0), at(10.0, 0.0), at(20.0, 0.0), at(30.0, 0.0)];
        let order: Vec<(usize, usize)> = links(&particles).iter().map(|l| (l.a, l.b)).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn counts_every_unordered_pair() {
        let particles: Vec<Particle> = (0..80).map(|i| at(i as f32 * 500.0, 0.0)).collect();
        let checked = for_each_link(&particles, 120.0, 0.12, |_| panic!("nothing is close"));
        assert_eq!(checked, 3160);
    }

    #[test]
    fn empty_and_single_populations_check_nothing() {
        assert_eq!(for_each_link(&[], 120.0, 0.12, |_| {}), 0);
        assert_eq!(for_each_link(&[at(1.0, 1.0)], 120.0, 0.12, |_| {}), 0);
    }
}
